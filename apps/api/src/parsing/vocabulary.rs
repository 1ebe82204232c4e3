//! Static skill vocabularies and whitelists used by the skill extractor.

use crate::text::domain::Domain;

const TECH_SKILLS: &[&str] = &[
    // languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust", "php",
    "swift", "kotlin", "scala", "perl", "matlab", "r programming", "sql", "plsql", "objective-c",
    "dart", "elixir", "clojure", "haskell", "groovy",
    // web
    "html", "html5", "css", "css3", "sass", "scss", "less", "react", "reactjs", "react.js",
    "angular", "angularjs", "vue", "vue.js", "vuejs", "svelte", "nextjs", "next.js", "node.js",
    "nodejs", "express", "expressjs", "django", "flask", "spring", "spring boot", "asp.net",
    "fastapi", "nestjs", "laravel", "ruby on rails", "redux", "webpack", "vite",
    // mobile
    "android", "ios", "react native", "flutter", "xamarin", "ionic", "cordova",
    // cloud and devops
    "aws", "amazon web services", "azure", "microsoft azure", "gcp", "google cloud", "docker",
    "kubernetes", "k8s", "jenkins", "terraform", "ansible", "puppet", "chef", "ci/cd",
    "circleci", "travis ci", "git", "github", "gitlab", "bitbucket", "svn", "cloudformation",
    "serverless", "lambda", "ec2", "s3", "cloudwatch", "ecs", "eks",
    // databases
    "mysql", "postgresql", "mongodb", "redis", "dynamodb", "cassandra", "elasticsearch",
    "mariadb", "oracle", "sql server", "sqlite", "neo4j", "couchdb", "firestore",
    // data science and ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "keras", "scikit-learn",
    "pandas", "numpy", "scipy", "spark", "apache spark", "hadoop", "data analysis", "nlp",
    "natural language processing", "computer vision", "opencv", "data mining",
    "statistical analysis", "jupyter", "tableau", "power bi", "data visualization",
    // testing
    "testing", "unit testing", "integration testing", "junit", "pytest", "jest", "mocha",
    "selenium", "cypress", "testng", "cucumber", "tdd", "bdd", "qa", "quality assurance",
    // practices and protocols
    "agile", "scrum", "kanban", "jira", "confluence", "rest api", "restful", "graphql",
    "microservices", "linux", "unix", "bash", "shell scripting", "api development", "oauth",
    "jwt", "websockets", "grpc", "rabbitmq", "kafka", "nginx", "apache", "mvc", "mvvm",
    "design patterns", "oop", "functional programming", "distributed systems",
];

const MEDICAL_SKILLS: &[&str] = &[
    "patient care", "clinical", "diagnosis", "treatment", "healthcare", "nursing", "cpr", "bls",
    "acls", "pals", "emr", "ehr", "epic", "cerner", "meditech", "hipaa", "medical terminology",
    "pharmacology", "anatomy", "physiology", "surgery", "emergency medicine", "critical care",
    "icu", "er", "radiology", "cardiology", "oncology", "pediatrics", "obstetrics",
    "medical records", "icd-10", "cpt coding", "medical billing", "phlebotomy", "iv therapy",
    "wound care", "vital signs", "medications",
];

const BUSINESS_SKILLS: &[&str] = &[
    "sales", "marketing", "seo", "sem", "ppc", "google ads", "facebook ads", "content marketing",
    "email marketing", "social media", "crm", "salesforce", "hubspot", "market research",
    "competitive analysis", "roi", "kpi", "brand management", "digital marketing", "analytics",
    "google analytics", "campaign management", "lead generation", "conversion optimization",
    "b2b", "b2c", "ecommerce", "shopify", "magento", "wordpress", "copywriting",
    "content strategy", "customer acquisition", "retention", "market segmentation",
    "positioning", "pricing strategy", "distribution",
];

const FINANCE_SKILLS: &[&str] = &[
    "accounting", "bookkeeping", "financial analysis", "budgeting", "forecasting", "quickbooks",
    "sage", "sap", "oracle financials", "gaap", "ifrs", "financial reporting", "audit",
    "tax preparation", "accounts payable", "accounts receivable", "payroll", "reconciliation",
    "general ledger", "financial modeling", "valuation", "investment analysis",
    "portfolio management", "risk management", "derivatives", "fixed income", "equity research",
    "excel", "vba", "financial statements", "cash flow analysis", "variance analysis", "cpa",
    "cfa", "cma", "cia", "sox compliance", "internal controls",
];

/// Known skills for a domain, in scan order.
pub fn skills_for(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Tech => TECH_SKILLS,
        Domain::Medical => MEDICAL_SKILLS,
        Domain::Business => BUSINESS_SKILLS,
        Domain::Finance => FINANCE_SKILLS,
    }
}

/// Single letters and function words that are never skills.
pub const INVALID_SKILLS: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z", "in", "on", "at", "to", "for", "of", "and", "or",
    "the", "is", "it", "with", "from", "by", "as", "an", "be", "this", "that", "have", "has",
    "had", "do", "does", "did", "will", "would", "should", "could", "may", "might", "can",
    "must", "shall", "am", "are", "was", "were", "been",
];

/// Mixed-case technology names matched verbatim against the original text.
pub const COMPOUND_TECH_NAMES: &[&str] = &[
    "JavaScript", "TypeScript", "DevOps", "GraphQL", "MongoDB", "PostgreSQL", "MySQL",
    "DynamoDB", "CloudFormation", "CloudFront", "GitHub", "GitLab", "BitBucket", "TensorFlow",
    "PyTorch", "PowerShell", "AutoCAD",
];

/// Upper-case acronyms accepted by the acronym pass.
pub const TECH_ACRONYMS: &[&str] = &[
    "AWS", "GCP", "SQL", "API", "REST", "HTTP", "HTTPS", "JSON", "XML", "HTML", "CSS", "SDK",
    "IDE", "CLI", "ORM", "JWT", "CI/CD", "ML", "AI", "NLP", "UI", "UX", "DOM", "SPA", "MVC",
    "MVVM", "TDD", "BDD", "OOP", "ETL", "CRUD", "AJAX",
];
