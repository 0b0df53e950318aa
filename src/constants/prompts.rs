pub const SYSTEM_PROMPT: &str = r#"You are a senior DevOps engineer specializing in CI/CD pipelines for .NET applications.
Your task is to analyze pipeline YAML files and provide actionable feedback.
Your response MUST be a valid JSON object. Do not include markdown formatting.
Severity levels: Error = must fix, Warning = should fix, Info = nice to have.
Be specific and actionable in suggestions."#;

pub const RESPONSE_SCHEMA: &str = r#"{
    "summary": "A 2-3 sentence overview",
    "issues": [
        {
            "severity": "Error|Warning|Info",
            "category": "Security|Performance|Quality|Reliability|Maintainability",
            "message": "Description",
            "suggestion": "Fix",
            "lineReference": "Optional hint"
        }
    ],
    "suggestedYaml": "Improved YAML or null",
    "metadata": {
        "jobCount": 0,
        "stepCount": 0,
        "hasTests": false,
        "hasCaching": false,
        "hasSecurityScanning": false,
        "hasArtifactPublishing": false,
        "detectedTools": []
    }
}"#;
