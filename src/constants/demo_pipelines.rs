use crate::enums::pipeline_platform::PipelinePlatform;

pub const AZURE_DEVOPS_DEMO: &str = r"trigger:
  - main

pool:
  vmImage: 'ubuntu-latest'

steps:
  - task: DotNetCoreCLI@2
    displayName: 'Restore packages'
    inputs:
      command: 'restore'
      projects: '**/*.csproj'

  - task: DotNetCoreCLI@2
    displayName: 'Build'
    inputs:
      command: 'build'
      projects: '**/*.csproj'
      arguments: '--configuration Release'

  - script: echo 'Deployment would happen here'
    displayName: 'Deploy placeholder'
";

pub const GITHUB_ACTIONS_DEMO: &str = r"name: Build and Test

on:
  push:
    branches: [ main ]
  pull_request:
    branches: [ main ]

jobs:
  build:
    runs-on: ubuntu-latest

    steps:
    - uses: actions/checkout@main

    - name: Setup .NET
      uses: actions/setup-dotnet@v3
      with:
        dotnet-version: 9.0.x

    - name: Restore
      run: dotnet restore

    - name: Build
      run: dotnet build --configuration Release
";

/// Built-in sample used by `--demo`.
pub fn demo_yaml(platform: PipelinePlatform) -> &'static str {
    match platform {
        PipelinePlatform::AzureDevOps => AZURE_DEVOPS_DEMO,
        PipelinePlatform::GitHubActions => GITHUB_ACTIONS_DEMO,
    }
}
