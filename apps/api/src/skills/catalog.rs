//! Skill catalog: the read-only table of canonical skills, their display
//! categories, lowercase aliases and relevance weights.
//!
//! Built once at startup and shared behind an `Arc`. There are no mutation
//! operations; extraction calls only ever read from it.

use std::collections::HashMap;

use serde::Serialize;

/// Maximum number of entries returned by [`SkillCatalog::search_suggestions`].
pub const SUGGESTION_LIMIT: usize = 10;

/// One canonical skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillDefinition {
    pub canonical_name: String,
    pub category: String,
    /// Lowercase surface forms. Always starts with the lowercased canonical name.
    pub aliases: Vec<String>,
    /// Final confidence multiplier in (0, 1].
    pub weight: f64,
}

impl SkillDefinition {
    /// Builds a definition, normalizing aliases to lowercase and making sure the
    /// canonical name is the first alias. Duplicate aliases are dropped.
    pub fn new(canonical_name: &str, category: &str, aliases: &[&str], weight: f64) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(aliases.len() + 1);
        for alias in std::iter::once(canonical_name).chain(aliases.iter().copied()) {
            let alias = alias.trim().to_lowercase();
            if !alias.is_empty() && !normalized.contains(&alias) {
                normalized.push(alias);
            }
        }

        Self {
            canonical_name: canonical_name.to_string(),
            category: category.to_string(),
            aliases: normalized,
            weight: weight.clamp(f64::MIN_POSITIVE, 1.0),
        }
    }
}

/// Result row for as-you-type search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSuggestion {
    pub name: String,
    pub category: String,
}

/// Canonical name → definition, iterated in definition order.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    definitions: Vec<SkillDefinition>,
    index: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Builds a catalog from explicit definitions. A later definition with the
    /// same canonical name replaces the earlier one in place.
    pub fn from_definitions(definitions: impl IntoIterator<Item = SkillDefinition>) -> Self {
        let mut catalog = Self {
            definitions: Vec::new(),
            index: HashMap::new(),
        };
        for definition in definitions {
            match catalog.index.get(&definition.canonical_name) {
                Some(&slot) => catalog.definitions[slot] = definition,
                None => {
                    catalog
                        .index
                        .insert(definition.canonical_name.clone(), catalog.definitions.len());
                    catalog.definitions.push(definition);
                }
            }
        }
        catalog
    }

    /// The compiled-in catalog used by the service.
    pub fn builtin() -> Self {
        Self::from_definitions(
            BUILTIN_SKILLS
                .iter()
                .map(|(name, category, aliases, weight)| {
                    SkillDefinition::new(name, category, aliases, *weight)
                }),
        )
    }

    /// Every canonical name, in definition order.
    pub fn all_skills(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|d| d.canonical_name.as_str())
            .collect()
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn definition_of(&self, canonical_name: &str) -> Option<&SkillDefinition> {
        self.index
            .get(canonical_name)
            .map(|&slot| &self.definitions[slot])
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.index.contains_key(canonical_name)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Skills whose canonical name starts with or contains `query`
    /// (case-insensitive), in catalog order, capped at [`SUGGESTION_LIMIT`].
    /// A blank query yields nothing.
    pub fn search_suggestions(&self, query: &str) -> Vec<SkillSuggestion> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.definitions
            .iter()
            .filter(|d| {
                let name = d.canonical_name.to_lowercase();
                name.starts_with(&query) || name.contains(&query)
            })
            .take(SUGGESTION_LIMIT)
            .map(|d| SkillSuggestion {
                name: d.canonical_name.clone(),
                category: d.category.clone(),
            })
            .collect()
    }
}

type SkillSeed = (&'static str, &'static str, &'static [&'static str], f64);

// (canonical name, category, aliases, weight)
const BUILTIN_SKILLS: &[SkillSeed] = &[
    // Programming languages
    ("JavaScript", "Programming Languages", &["js", "javascript", "ecmascript"], 1.0),
    ("Python", "Programming Languages", &["python3", "py"], 1.0),
    ("Java", "Programming Languages", &["java"], 1.0),
    ("TypeScript", "Programming Languages", &["ts", "typescript"], 1.0),
    ("C++", "Programming Languages", &["cpp", "c++", "cplusplus"], 1.0),
    ("C#", "Programming Languages", &["csharp", "c#"], 1.0),
    ("C", "Programming Languages", &["c"], 1.0),
    ("Go", "Programming Languages", &["golang", "go"], 1.0),
    ("Rust", "Programming Languages", &["rust"], 1.0),
    ("PHP", "Programming Languages", &["php"], 1.0),
    ("Ruby", "Programming Languages", &["ruby"], 1.0),
    ("Swift", "Programming Languages", &["swift"], 1.0),
    ("Kotlin", "Programming Languages", &["kotlin"], 1.0),
    ("Dart", "Programming Languages", &["dart"], 1.0),
    ("Scala", "Programming Languages", &["scala"], 1.0),
    ("R", "Programming Languages", &["r"], 1.0),
    ("MATLAB", "Programming Languages", &["matlab"], 1.0),
    // Frontend
    ("React", "Frontend Frameworks", &["reactjs", "react.js"], 1.0),
    ("Angular", "Frontend Frameworks", &["angularjs", "angular"], 1.0),
    ("Vue.js", "Frontend Frameworks", &["vue", "vuejs"], 1.0),
    ("Next.js", "Frontend Frameworks", &["nextjs", "next"], 1.0),
    ("Nuxt.js", "Frontend Frameworks", &["nuxtjs", "nuxt"], 1.0),
    ("Svelte", "Frontend Frameworks", &["svelte"], 1.0),
    ("HTML", "Web Technologies", &["html5", "html"], 0.8),
    ("CSS", "Web Technologies", &["css3", "css"], 0.8),
    ("Sass", "Web Technologies", &["scss", "sass"], 0.9),
    ("Tailwind CSS", "Web Technologies", &["tailwind", "tailwindcss"], 0.9),
    ("Bootstrap", "Web Technologies", &["bootstrap"], 0.8),
    ("jQuery", "Web Technologies", &["jquery"], 0.7),
    // Backend
    ("Node.js", "Backend Technologies", &["nodejs", "node"], 1.0),
    ("Express.js", "Backend Technologies", &["express", "expressjs"], 0.9),
    ("Django", "Backend Technologies", &["django"], 1.0),
    ("Flask", "Backend Technologies", &["flask"], 0.9),
    ("FastAPI", "Backend Technologies", &["fastapi"], 0.9),
    ("Spring", "Backend Technologies", &["spring boot", "spring"], 1.0),
    ("ASP.NET", "Backend Technologies", &["asp.net", "aspnet"], 1.0),
    ("Laravel", "Backend Technologies", &["laravel"], 0.9),
    ("Ruby on Rails", "Backend Technologies", &["rails", "ror"], 1.0),
    // Databases
    ("MySQL", "Databases", &["mysql"], 1.0),
    ("PostgreSQL", "Databases", &["postgres", "postgresql"], 1.0),
    ("MongoDB", "Databases", &["mongo", "mongodb"], 1.0),
    ("Redis", "Databases", &["redis"], 0.9),
    ("SQLite", "Databases", &["sqlite"], 0.8),
    ("Oracle", "Databases", &["oracle db", "oracle"], 1.0),
    ("SQL Server", "Databases", &["sqlserver", "mssql"], 1.0),
    ("Cassandra", "Databases", &["cassandra"], 0.9),
    ("DynamoDB", "Databases", &["dynamodb"], 0.9),
    ("Elasticsearch", "Databases", &["elasticsearch", "elastic"], 0.9),
    // Cloud
    ("AWS", "Cloud Platforms", &["amazon web services", "aws"], 1.0),
    ("Azure", "Cloud Platforms", &["microsoft azure", "azure"], 1.0),
    ("GCP", "Cloud Platforms", &["google cloud", "gcp", "google cloud platform"], 1.0),
    ("Heroku", "Cloud Platforms", &["heroku"], 0.8),
    ("DigitalOcean", "Cloud Platforms", &["digitalocean", "digital ocean"], 0.8),
    ("Vercel", "Cloud Platforms", &["vercel"], 0.7),
    ("Netlify", "Cloud Platforms", &["netlify"], 0.7),
    // DevOps
    ("Docker", "DevOps Tools", &["docker"], 1.0),
    ("Kubernetes", "DevOps Tools", &["k8s", "kubernetes"], 1.0),
    ("Jenkins", "DevOps Tools", &["jenkins"], 0.9),
    ("GitLab CI", "DevOps Tools", &["gitlab ci/cd", "gitlab ci"], 0.9),
    ("GitHub Actions", "DevOps Tools", &["github actions"], 0.9),
    ("Terraform", "DevOps Tools", &["terraform"], 1.0),
    ("Ansible", "DevOps Tools", &["ansible"], 0.9),
    ("Vagrant", "DevOps Tools", &["vagrant"], 0.8),
    // Version control
    ("Git", "Version Control", &["git"], 0.9),
    ("GitHub", "Version Control", &["github"], 0.8),
    ("GitLab", "Version Control", &["gitlab"], 0.8),
    ("Bitbucket", "Version Control", &["bitbucket"], 0.8),
    ("SVN", "Version Control", &["subversion", "svn"], 0.7),
    // Mobile
    ("React Native", "Mobile Development", &["react native", "react-native"], 1.0),
    ("Flutter", "Mobile Development", &["flutter"], 1.0),
    ("iOS Development", "Mobile Development", &["ios", "ios development"], 1.0),
    ("Android Development", "Mobile Development", &["android", "android development"], 1.0),
    ("Xamarin", "Mobile Development", &["xamarin"], 0.9),
    ("Ionic", "Mobile Development", &["ionic"], 0.8),
    // Data science & AI
    ("Machine Learning", "Data Science & AI", &["ml", "machine learning"], 1.0),
    ("Deep Learning", "Data Science & AI", &["deep learning", "dl"], 1.0),
    ("TensorFlow", "Data Science & AI", &["tensorflow", "tf"], 1.0),
    ("PyTorch", "Data Science & AI", &["pytorch", "torch"], 1.0),
    ("Scikit-learn", "Data Science & AI", &["sklearn", "scikit-learn"], 0.9),
    ("Pandas", "Data Science & AI", &["pandas"], 0.9),
    ("NumPy", "Data Science & AI", &["numpy"], 0.9),
    ("Matplotlib", "Data Science & AI", &["matplotlib"], 0.8),
    ("Seaborn", "Data Science & AI", &["seaborn"], 0.8),
    ("Jupyter", "Data Science & AI", &["jupyter notebook", "jupyter"], 0.8),
    ("OpenCV", "Data Science & AI", &["opencv", "cv2"], 0.9),
    ("NLP", "Data Science & AI", &["natural language processing", "nlp"], 0.9),
    ("Computer Vision", "Data Science & AI", &["computer vision", "cv"], 0.9),
    // Testing
    ("Jest", "Testing", &["jest"], 0.8),
    ("Mocha", "Testing", &["mocha"], 0.8),
    ("Cypress", "Testing", &["cypress"], 0.8),
    ("Selenium", "Testing", &["selenium"], 0.9),
    ("Pytest", "Testing", &["pytest"], 0.8),
    ("Unit Testing", "Testing", &["unit testing", "unit test"], 0.7),
    // Operating systems
    ("Linux", "Operating Systems", &["linux", "ubuntu", "centos"], 0.9),
    ("Windows", "Operating Systems", &["windows"], 0.7),
    ("macOS", "Operating Systems", &["macos", "mac os"], 0.7),
    // APIs, architecture, process
    ("GraphQL", "APIs", &["graphql"], 0.9),
    ("REST API", "APIs", &["rest", "restful", "rest api"], 0.9),
    ("Microservices", "Architecture", &["microservices"], 1.0),
    ("API Design", "APIs", &["api design"], 0.8),
    ("Agile", "Methodologies", &["agile", "scrum"], 0.7),
    ("CI/CD", "DevOps Tools", &["ci/cd", "continuous integration"], 0.9),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preserves_definition_order() {
        let catalog = SkillCatalog::builtin();
        let all = catalog.all_skills();
        assert_eq!(all.len(), BUILTIN_SKILLS.len());
        assert_eq!(all[0], "JavaScript");
        assert_eq!(all[1], "Python");
        assert_eq!(*all.last().unwrap(), "CI/CD");
    }

    #[test]
    fn test_aliases_always_include_canonical_name_first() {
        let catalog = SkillCatalog::builtin();
        for definition in catalog.definitions() {
            assert!(!definition.aliases.is_empty());
            assert_eq!(definition.aliases[0], definition.canonical_name.to_lowercase());
        }
    }

    #[test]
    fn test_aliases_are_lowercase_and_unique() {
        let def = SkillDefinition::new(
            "JavaScript",
            "Programming Languages",
            &["JS", "javascript", "js"],
            1.0,
        );
        assert_eq!(def.aliases, vec!["javascript", "js"]);
    }

    #[test]
    fn test_weights_in_unit_interval() {
        let catalog = SkillCatalog::builtin();
        for definition in catalog.definitions() {
            assert!(definition.weight > 0.0 && definition.weight <= 1.0);
        }
    }

    #[test]
    fn test_definition_of_is_exact_and_case_sensitive() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.definition_of("Kubernetes").unwrap().category, "DevOps Tools");
        assert!(catalog.definition_of("kubernetes").is_none());
    }

    #[test]
    fn test_definition_of_unknown_returns_none() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.definition_of("NoSuchSkill").is_none());
    }

    #[test]
    fn test_search_prefix_and_substring_in_catalog_order() {
        let catalog = SkillCatalog::builtin();
        let results = catalog.search_suggestions("Script");
        let names: Vec<&str> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["JavaScript", "TypeScript"]);
        assert_eq!(results[0].category, "Programming Languages");
    }

    #[test]
    fn test_search_caps_results() {
        let catalog = SkillCatalog::builtin();
        // "a" occurs in far more than ten canonical names
        assert_eq!(catalog.search_suggestions("a").len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn test_search_blank_query_is_empty() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.search_suggestions("   ").is_empty());
    }

    #[test]
    fn test_is_empty_tracks_definitions() {
        assert!(!SkillCatalog::builtin().is_empty());
        assert!(SkillCatalog::from_definitions(Vec::new()).is_empty());
    }

    #[test]
    fn test_duplicate_canonical_name_replaces_in_place() {
        let catalog = SkillCatalog::from_definitions(vec![
            SkillDefinition::new("Rust", "Languages", &[], 0.5),
            SkillDefinition::new("Go", "Languages", &[], 1.0),
            SkillDefinition::new("Rust", "Systems", &[], 0.9),
        ]);
        assert_eq!(catalog.all_skills(), vec!["Rust", "Go"]);
        assert_eq!(catalog.definition_of("Rust").unwrap().category, "Systems");
    }
}
