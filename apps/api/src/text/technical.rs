//! Technical-term heuristics and job keyword extraction.
//!
//! `is_technical_keyword` decides whether a single word names a technology:
//! first by category vocabulary, then by shape (file-extension suffixes,
//! embedded acronyms, version digits, internal capitals, hyphenated compounds).
//! `extract_keywords` applies it to a job description and ranks by frequency.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::text::tokenizer::tokenize;

/// Category vocabularies: languages, frameworks, cloud, databases, tools,
/// ML/AI, testing, protocols.
const TECH_CATEGORIES: &[&[&str]] = &[
    &[
        "python", "java", "javascript", "typescript", "kotlin", "swift", "ruby", "php", "golang",
        "rust", "scala", "cpp", "csharp", "perl", "dart", "sql",
    ],
    &[
        "react", "angular", "vue", "django", "flask", "spring", "express", "fastapi", "nextjs",
        "gatsby", "svelte", "rails", "laravel", "dotnet", "redux",
    ],
    &[
        "aws", "azure", "gcp", "ec2", "s3", "lambda", "dynamodb", "cloudformation", "terraform",
        "ansible", "puppet", "chef", "kubernetes", "docker", "k8s",
    ],
    &[
        "mongodb", "postgresql", "mysql", "redis", "cassandra", "elasticsearch", "neo4j",
        "oracle", "sqlite", "dynamodb", "firebase", "mariadb",
    ],
    &[
        "git", "jenkins", "gitlab", "github", "circleci", "jira", "gradle", "maven", "npm",
        "yarn", "webpack", "vite", "babel",
    ],
    &[
        "tensorflow", "pytorch", "keras", "pandas", "numpy", "spark", "scikit", "hadoop",
        "airflow", "mlflow", "sagemaker", "opencv",
    ],
    &["junit", "pytest", "jest", "mocha", "selenium", "cypress", "testng"],
    &["graphql", "grpc", "websocket", "mqtt", "amqp", "kafka", "rabbitmq"],
];

static TECH_TERMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TECH_CATEGORIES.iter().flat_map(|c| c.iter().copied()).collect());

/// Vocabulary terms long enough to be matched as substrings ("react-native" ⊃ "react").
static TECH_STEMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    TECH_CATEGORIES
        .iter()
        .flat_map(|c| c.iter().copied())
        .filter(|t| t.chars().count() > 3)
        .collect()
});

const LANGUAGE_SUFFIXES: &[&str] = &["js", "py", "rb", "go", "rs"];
const FILE_SUFFIXES: &[&str] = &[".js", ".py", ".java", ".cpp", ".rb"];
const QUERY_SUFFIXES: &[&str] = &["sql", "db", "ql"];
const EMBEDDED_ACRONYMS: &[&str] = &[
    "sdk", "ide", "cli", "orm", "jwt", "oauth", "saml", "xml", "json", "yaml",
];

/// Role, filler and business words that never count as job keywords.
static GENERIC_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // verbs
        "experience", "work", "build", "create", "develop", "implement", "maintain", "design",
        "write", "test", "deploy", "drive", "manage", "lead", "help",
        // positions
        "senior", "junior", "principal", "staff", "associate", "intern", "manager", "director",
        "engineer", "engineers", "developer", "developers", "architect", "consultant", "team",
        "teams", "member", "members",
        // generic tech context
        "product", "products", "project", "projects", "platform", "platforms", "system",
        "systems", "service", "services", "application", "applications", "solution",
        "solutions", "feature", "features", "component", "components", "code", "software",
        "hardware", "tool", "tools", "environment",
        // time and quantities
        "years", "year", "months", "month", "day", "days", "millions", "thousands", "scale",
        "least", "active",
        // role descriptors
        "requirements", "responsibilities", "duties", "tasks", "qualifications", "skills",
        "skill", "ability", "knowledge", "expertise", "proficiency",
        // tech-adjacent words that are not skills
        "production", "field", "based", "related", "using", "native", "computer", "machines",
        "user", "users", "client", "clients", "customer", "customers", "people", "person",
        "business", "company",
    ]
    .into_iter()
    .collect()
});

/// Returns true if `word` looks like the name of a technology.
///
/// Case matters for two of the shape rules (all-caps acronyms and internal
/// capitals), so callers may pass either original-case or lowercased words.
pub fn is_technical_keyword(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let lower = word.to_lowercase();
    let len = lower.chars().count();

    if TECH_TERMS.contains(lower.as_str()) || TECH_STEMS.iter().any(|t| lower.contains(t)) {
        return true;
    }

    if LANGUAGE_SUFFIXES.iter().any(|s| lower.ends_with(s)) && len <= 10 {
        return true;
    }
    if FILE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return true;
    }
    if QUERY_SUFFIXES.iter().any(|s| lower.ends_with(s)) && len > 2 {
        return true;
    }
    if EMBEDDED_ACRONYMS.iter().any(|a| lower.contains(a)) && len <= 15 {
        return true;
    }

    let word_len = word.chars().count();
    if (2..=4).contains(&word_len) && word.chars().all(|c| c.is_uppercase()) {
        return true;
    }

    if (lower.contains('.') || lower.contains('+')) && len <= 12 {
        return true;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        if first.is_uppercase() && chars.any(|c| c.is_uppercase()) && word_len > 3 {
            return true;
        }
    }

    if lower.contains('-') && len > 5 {
        let parts: Vec<&str> = lower.split('-').collect();
        if parts
            .iter()
            .any(|part| TECH_TERMS.iter().any(|term| term.contains(part)))
        {
            return true;
        }
    }

    let has_digit = word.chars().any(|c| c.is_ascii_digit());
    let has_alpha = word.chars().any(|c| c.is_alphabetic());
    has_digit && has_alpha && word_len <= 15
}

/// Extracts the `top_n` most frequent technical keywords from a job description.
///
/// Ties keep first-occurrence order.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let tokens = tokenize(text);

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in tokens.iter() {
        if GENERIC_WORDS.contains(token) || token.len() < 3 {
            continue;
        }
        if !is_technical_keyword(token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
        .into_iter()
        .take(top_n)
        .map(str::to_string)
        .collect()
}
