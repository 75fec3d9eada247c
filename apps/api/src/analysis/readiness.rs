//! Role readiness: how much of each role's required skill list a user already holds.
//!
//! Plain set overlap against a static role table. Matching is case-insensitive;
//! output keeps the table's spelling and order.

use std::collections::HashSet;

use serde::Serialize;

/// Number of missing skills surfaced as next steps for a role.
pub const SUGGESTED_PER_ROLE: usize = 5;

/// Role title → required skills, in display order.
#[rustfmt::skip]
pub const ROLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    // Web & Frontend
    ("Web Developer", &["HTML", "CSS", "JavaScript", "React", "Angular", "Vue.js", "Node.js", "Git", "Webpack", "Babel", "REST API", "GraphQL"]),
    ("Frontend Developer", &["HTML", "CSS", "JavaScript", "React", "Vue.js", "SASS", "TypeScript", "Redux", "Tailwind CSS", "Responsive Design"]),
    ("Backend Developer", &["Python", "Node.js", "Java", "C#", "SQL", "MongoDB", "REST API", "GraphQL", "Docker", "Microservices", "Spring", "Express.js"]),
    ("Full Stack Developer", &["HTML", "CSS", "JavaScript", "React", "Node.js", "Python", "SQL", "NoSQL", "Docker", "Git", "REST API", "GraphQL", "Redux", "TypeScript"]),
    // Mobile
    ("Mobile Developer", &["Java", "Kotlin", "Swift", "React Native", "Flutter", "Android Development", "iOS Development", "Xamarin", "UI/UX Design"]),
    // Data & AI/ML
    ("Data Scientist", &["Python", "R", "SQL", "Machine Learning", "Statistics", "Pandas", "NumPy", "Matplotlib", "Seaborn", "TensorFlow", "PyTorch", "Scikit-learn", "Data Visualization", "Deep Learning", "NLP", "Data Cleaning"]),
    ("AI/ML Engineer", &["Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Scikit-learn", "Keras", "NLP", "Computer Vision", "Reinforcement Learning", "Data Analysis", "Model Deployment"]),
    ("Data Engineer", &["Python", "SQL", "ETL", "Apache Spark", "Hadoop", "Airflow", "Kafka", "AWS", "GCP", "BigQuery", "Data Warehousing", "Data Modeling"]),
    ("BI Analyst", &["SQL", "Power BI", "Tableau", "Data Visualization", "Excel", "Analytics", "DAX", "Data Storytelling"]),
    // DevOps & Cloud
    ("DevOps Engineer", &["Docker", "Kubernetes", "AWS", "Azure", "GCP", "Linux", "CI/CD", "Terraform", "Ansible", "Jenkins", "Monitoring", "Prometheus", "CloudFormation"]),
    ("Cloud Engineer", &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Linux", "Cloud Security", "Networking", "Serverless Architecture"]),
    ("System Administrator", &["Linux", "Windows", "macOS", "Ansible", "Terraform", "Docker", "Networking", "Server Maintenance", "Active Directory"]),
    // Database
    ("Database Administrator", &["SQL", "MySQL", "PostgreSQL", "MongoDB", "Oracle", "Redis", "Database Design", "Indexing", "Backup & Recovery", "Query Optimization"]),
    // QA & Testing
    ("QA Engineer", &["Selenium", "Pytest", "Jest", "Mocha", "Unit Testing", "Integration Testing", "Cypress", "Test Automation", "Performance Testing", "Load Testing"]),
    // Security
    ("Security Engineer", &["Linux", "Python", "AWS", "Docker", "Kubernetes", "CI/CD", "Penetration Testing", "Vulnerability Assessment", "Network Security", "Cryptography", "Compliance"]),
    // Product & Management
    ("Product Manager", &["Agile", "Scrum", "Kanban", "API Design", "Roadmapping", "Communication", "Teamwork", "Prioritization", "Stakeholder Management", "Market Analysis"]),
    ("Project Manager", &["Agile", "Scrum", "Kanban", "Budgeting", "Risk Management", "Scheduling", "Team Coordination", "Communication"]),
    // Emerging
    ("Blockchain Developer", &["Solidity", "Ethereum", "Smart Contracts", "Web3.js", "Truffle", "Hardhat", "NFTs", "Blockchain Architecture"]),
    ("IoT Engineer", &["C", "C++", "Python", "Embedded Systems", "Microcontrollers", "Raspberry Pi", "Arduino", "MQTT", "Sensors", "IoT Protocols"]),
    ("Game Developer", &["C++", "C#", "Unity", "Unreal Engine", "3D Modeling", "Animation", "Shader Programming", "Game Physics"]),
    ("AR/VR Developer", &["Unity", "Unreal Engine", "C#", "3D Modeling", "XR Interaction", "OpenXR", "ARKit", "ARCore"]),
    // Design & Docs
    ("UX/UI Designer", &["Figma", "Sketch", "Adobe XD", "Wireframing", "Prototyping", "User Research", "Interaction Design", "Responsive Design", "Accessibility"]),
    ("Technical Writer", &["Documentation", "Markdown", "API Docs", "Confluence", "Git", "Communication", "Editing", "Research"]),
    ("Cloud Security Engineer", &["AWS Security", "Azure Security", "GCP Security", "IAM", "Encryption", "SIEM", "Vulnerability Assessment", "Compliance"]),
    ("Big Data Engineer", &["Hadoop", "Spark", "Kafka", "Airflow", "Hive", "SQL", "NoSQL", "Data Lakes", "ETL", "Python", "Scala"]),
    // AI specializations
    ("Computer Vision Engineer", &["Python", "OpenCV", "TensorFlow", "PyTorch", "Deep Learning", "Image Processing", "Object Detection", "YOLO", "GANs"]),
    ("NLP Engineer", &["Python", "NLP", "Spacy", "NLTK", "Transformers", "BERT", "GPT", "Text Classification", "Sentiment Analysis"]),
    // Hardware
    ("Embedded Systems Engineer", &["C", "C++", "Microcontrollers", "RTOS", "Circuit Design", "PCB Design", "IoT", "Firmware"]),
    ("Robotics Engineer", &["Python", "ROS", "C++", "Sensors", "Actuators", "Control Systems", "Kinematics", "Simulation"]),
];

/// Readiness of one user for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleReadiness {
    pub title: String,
    /// 0 – 100, floor of the matched percentage.
    pub readiness: u32,
    pub description: String,
    pub missing_skills: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub pathways: Vec<Vec<String>>,
}

/// Evaluates the user's skills against every role in [`ROLE_REQUIREMENTS`].
///
/// Roles with no overlap are left out. The result is ordered by readiness,
/// highest first; ties keep table order.
pub fn evaluate_roles<S: AsRef<str>>(user_skills: &[S]) -> Vec<RoleReadiness> {
    evaluate_against(ROLE_REQUIREMENTS, user_skills)
}

pub fn evaluate_against<S: AsRef<str>>(
    roles: &[(&str, &[&str])],
    user_skills: &[S],
) -> Vec<RoleReadiness> {
    let held: HashSet<String> = user_skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut results: Vec<RoleReadiness> = roles
        .iter()
        .filter_map(|(title, required)| readiness_for(title, required, &held))
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.readiness.cmp(&a.readiness));
    results
}

fn readiness_for(title: &str, required: &[&str], held: &HashSet<String>) -> Option<RoleReadiness> {
    if required.is_empty() {
        return None;
    }

    let required_lower: HashSet<String> = required.iter().map(|s| s.to_lowercase()).collect();
    let matched = required_lower.iter().filter(|s| held.contains(*s)).count();
    if matched == 0 {
        return None;
    }

    let missing_skills: Vec<String> = required
        .iter()
        .filter(|s| !held.contains(&s.to_lowercase()))
        .map(|s| s.to_string())
        .collect();

    Some(RoleReadiness {
        title: title.to_string(),
        readiness: (matched * 100 / required.len()) as u32,
        description: format!("Matched {matched} skills for {title}."),
        suggested_skills: missing_skills.iter().take(SUGGESTED_PER_ROLE).cloned().collect(),
        missing_skills,
        pathways: vec![required.iter().map(|s| s.to_string()).collect()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[(&str, &[&str])] = &[
        ("Alpha", &["Rust", "Go", "SQL", "Docker"]),
        ("Beta", &["Python", "SQL", "Pandas"]),
        ("Gamma", &["Figma"]),
        ("Delta", &["Rust", "Go", "SQL", "Docker"]),
    ];

    #[test]
    fn test_zero_overlap_roles_are_omitted() {
        let result = evaluate_against(ROLES, &["Rust"]);
        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Delta"]);
    }

    #[test]
    fn test_readiness_is_floored_percentage() {
        let result = evaluate_against(ROLES, &["python"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].readiness, 33);
        assert_eq!(result[0].description, "Matched 1 skills for Beta.");
    }

    #[test]
    fn test_sorted_by_readiness_then_table_order() {
        let result = evaluate_against(ROLES, &["SQL", "Pandas", "Rust"]);
        let summary: Vec<(&str, u32)> =
            result.iter().map(|r| (r.title.as_str(), r.readiness)).collect();
        assert_eq!(summary, vec![("Beta", 66), ("Alpha", 50), ("Delta", 50)]);
    }

    #[test]
    fn test_missing_and_suggested_keep_table_spelling() {
        let result = evaluate_against(ROLES, &["docker"]);
        let alpha = &result[0];
        assert_eq!(alpha.missing_skills, vec!["Rust", "Go", "SQL"]);
        assert_eq!(alpha.suggested_skills, vec!["Rust", "Go", "SQL"]);
        assert_eq!(alpha.pathways, vec![vec!["Rust", "Go", "SQL", "Docker"]]);
    }

    #[test]
    fn test_suggested_capped_at_five() {
        let result = evaluate_roles(&["Python"]);
        let data_scientist = result.iter().find(|r| r.title == "Data Scientist").unwrap();
        assert_eq!(data_scientist.missing_skills.len(), 15);
        assert_eq!(
            data_scientist.suggested_skills,
            vec!["R", "SQL", "Machine Learning", "Statistics", "Pandas"]
        );
    }

    #[test]
    fn test_no_skills_yields_empty_analysis() {
        let empty: Vec<String> = vec![];
        assert!(evaluate_roles(&empty).is_empty());
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let result = evaluate_against(ROLES, &["Figma"]);
        let json = serde_json::to_value(&result[0]).unwrap();
        assert_eq!(json["readiness"], 100);
        assert!(json.get("missingSkills").is_some());
        assert!(json.get("suggestedSkills").is_some());
    }
}
