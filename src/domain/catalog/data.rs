//! The catalog tables.
//!
//! Three domains, four goals each, one shared question batch and one
//! deep-dive batch per domain. Fixed at compile time.

use super::types::{
    Domain, DomainId, Goal, Question, QuestionCategory, QuestionKind, QuestionOption,
};

pub(super) const DOMAINS: &[Domain] = &[
    Domain {
        id: DomainId::Frontend,
        label: "Frontend Development",
        description: "User interfaces, browser platforms, and the tooling around them",
    },
    Domain {
        id: DomainId::Backend,
        label: "Backend Development",
        description: "APIs, services, data storage, and server-side engineering",
    },
    Domain {
        id: DomainId::Infrastructure,
        label: "Infrastructure & DevOps",
        description: "Cloud platforms, delivery automation, and keeping systems running",
    },
];

const FRONTEND_GOALS: &[Goal] = &[
    Goal {
        id: "fe_spa_developer",
        label: "Ship production single-page applications",
        description: "Build and deploy real SPAs with a modern framework",
        domain: DomainId::Frontend,
    },
    Goal {
        id: "fe_ui_engineer",
        label: "Become a UI engineer",
        description: "Accessible, polished interfaces and design-system work",
        domain: DomainId::Frontend,
    },
    Goal {
        id: "fe_performance_specialist",
        label: "Specialize in web performance",
        description: "Make pages fast and keep them fast",
        domain: DomainId::Frontend,
    },
    Goal {
        id: "fe_fullstack_ready",
        label: "Grow toward full-stack work",
        description: "Frontend first, with enough backend to own features end to end",
        domain: DomainId::Frontend,
    },
];

const BACKEND_GOALS: &[Goal] = &[
    Goal {
        id: "be_api_developer",
        label: "Design and ship web APIs",
        description: "HTTP services, data modeling, and API contracts",
        domain: DomainId::Backend,
    },
    Goal {
        id: "be_distributed_systems",
        label: "Build distributed systems",
        description: "Messaging, consistency, and services that scale out",
        domain: DomainId::Backend,
    },
    Goal {
        id: "be_data_engineer",
        label: "Move toward data engineering",
        description: "Pipelines, warehouses, and data-intensive services",
        domain: DomainId::Backend,
    },
    Goal {
        id: "be_platform_engineer",
        label: "Build internal platforms",
        description: "Shared services and tooling other teams build on",
        domain: DomainId::Backend,
    },
];

const INFRASTRUCTURE_GOALS: &[Goal] = &[
    Goal {
        id: "infra_cloud_engineer",
        label: "Run workloads on public cloud",
        description: "Core cloud services, networking, and cost-aware design",
        domain: DomainId::Infrastructure,
    },
    Goal {
        id: "infra_sre",
        label: "Practice site reliability engineering",
        description: "SLOs, incident response, and reliability as a discipline",
        domain: DomainId::Infrastructure,
    },
    Goal {
        id: "infra_devops",
        label: "Automate delivery pipelines",
        description: "CI/CD, infrastructure as code, and repeatable releases",
        domain: DomainId::Infrastructure,
    },
    Goal {
        id: "infra_security_ops",
        label: "Harden and secure infrastructure",
        description: "Secrets, network boundaries, and operational security",
        domain: DomainId::Infrastructure,
    },
];

pub(super) fn goals_for(domain: DomainId) -> &'static [Goal] {
    match domain {
        DomainId::Frontend => FRONTEND_GOALS,
        DomainId::Backend => BACKEND_GOALS,
        DomainId::Infrastructure => INFRASTRUCTURE_GOALS,
    }
}

pub(super) const COMMON_QUESTIONS: &[Question] = &[
    Question {
        id: "cq_experience",
        text: "How long have you been programming?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::Common,
        options: &[
            QuestionOption { id: "under_1y", label: "Less than a year" },
            QuestionOption { id: "y1_3", label: "1-3 years" },
            QuestionOption { id: "y3_5", label: "3-5 years" },
            QuestionOption { id: "over_5y", label: "More than 5 years" },
        ],
    },
    Question {
        id: "cq_weekly_hours",
        text: "How many hours per week can you dedicate to learning?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::Common,
        options: &[
            QuestionOption { id: "under_5", label: "Under 5 hours" },
            QuestionOption { id: "h5_10", label: "5-10 hours" },
            QuestionOption { id: "h10_20", label: "10-20 hours" },
            QuestionOption { id: "over_20", label: "More than 20 hours" },
        ],
    },
    Question {
        id: "cq_current_role",
        text: "Which best describes your current situation?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::Common,
        options: &[
            QuestionOption { id: "student", label: "Student" },
            QuestionOption { id: "career_changer", label: "Changing careers into tech" },
            QuestionOption { id: "junior_engineer", label: "Junior engineer" },
            QuestionOption { id: "experienced_engineer", label: "Experienced engineer" },
        ],
    },
    Question {
        id: "cq_learning_style",
        text: "How do you prefer to learn?",
        kind: QuestionKind::MultiSelect,
        category: QuestionCategory::Common,
        options: &[
            QuestionOption { id: "videos", label: "Video courses" },
            QuestionOption { id: "books", label: "Books and written guides" },
            QuestionOption { id: "hands_on", label: "Hands-on projects" },
            QuestionOption { id: "mentorship", label: "Mentorship and pairing" },
        ],
    },
    Question {
        id: "cq_timeline",
        text: "When do you want to reach your goal?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::Common,
        options: &[
            QuestionOption { id: "m3", label: "Within 3 months" },
            QuestionOption { id: "m6", label: "Within 6 months" },
            QuestionOption { id: "m12", label: "Within a year" },
            QuestionOption { id: "no_deadline", label: "No fixed deadline" },
        ],
    },
    Question {
        id: "cq_motivation",
        text: "What motivates this goal? Anything else we should know?",
        kind: QuestionKind::FreeText,
        category: QuestionCategory::Common,
        options: &[],
    },
];

const FRONTEND_QUESTIONS: &[Question] = &[
    Question {
        id: "fq_languages",
        text: "Which of these have you worked with?",
        kind: QuestionKind::MultiSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "html_css", label: "HTML and CSS" },
            QuestionOption { id: "javascript", label: "JavaScript" },
            QuestionOption { id: "typescript", label: "TypeScript" },
            QuestionOption { id: "none", label: "None yet" },
        ],
    },
    Question {
        id: "fq_frameworks",
        text: "Which frontend frameworks have you used?",
        kind: QuestionKind::MultiSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "react", label: "React" },
            QuestionOption { id: "vue", label: "Vue" },
            QuestionOption { id: "svelte", label: "Svelte" },
            QuestionOption { id: "angular", label: "Angular" },
            QuestionOption { id: "none", label: "None yet" },
        ],
    },
    Question {
        id: "fq_css_depth",
        text: "How deep does your CSS go?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "basics", label: "Selectors and basic styling" },
            QuestionOption { id: "layouts", label: "Flexbox and grid layouts" },
            QuestionOption { id: "animations", label: "Transitions and animations" },
            QuestionOption { id: "design_systems", label: "Design systems and theming" },
        ],
    },
    Question {
        id: "fq_state_management",
        text: "How comfortable are you managing application state?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "not_yet", label: "Haven't needed it" },
            QuestionOption { id: "component", label: "Component-local state" },
            QuestionOption { id: "context", label: "Shared state via context/stores" },
            QuestionOption { id: "complex", label: "Complex state with caching and sync" },
        ],
    },
    Question {
        id: "fq_testing",
        text: "How do you test frontend code today?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "never", label: "I don't yet" },
            QuestionOption { id: "some_unit", label: "Occasional unit tests" },
            QuestionOption { id: "component", label: "Component tests" },
            QuestionOption { id: "e2e", label: "End-to-end suites" },
        ],
    },
    Question {
        id: "fq_focus",
        text: "Which part of frontend work do you most want to improve?",
        kind: QuestionKind::FreeText,
        category: QuestionCategory::DomainSpecific,
        options: &[],
    },
];

const BACKEND_QUESTIONS: &[Question] = &[
    Question {
        id: "bq_languages",
        text: "Which server-side languages have you used?",
        kind: QuestionKind::MultiSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "python", label: "Python" },
            QuestionOption { id: "java_kotlin", label: "Java or Kotlin" },
            QuestionOption { id: "go", label: "Go" },
            QuestionOption { id: "rust", label: "Rust" },
            QuestionOption { id: "node", label: "Node.js" },
        ],
    },
    Question {
        id: "bq_databases",
        text: "How far does your database experience go?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "Not yet" },
            QuestionOption { id: "queries", label: "Writing queries" },
            QuestionOption { id: "schema_design", label: "Designing schemas" },
            QuestionOption { id: "tuning", label: "Indexing and query tuning" },
        ],
    },
    Question {
        id: "bq_api_experience",
        text: "Have you built HTTP APIs?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "Not yet" },
            QuestionOption { id: "consumed", label: "Consumed them from clients" },
            QuestionOption { id: "built_simple", label: "Built simple endpoints" },
            QuestionOption { id: "built_production", label: "Built production services" },
        ],
    },
    Question {
        id: "bq_async_messaging",
        text: "Have you worked with queues or asynchronous messaging?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "Not yet" },
            QuestionOption { id: "concepts", label: "Know the concepts" },
            QuestionOption { id: "used", label: "Used a queue in a project" },
            QuestionOption { id: "designed", label: "Designed messaging topologies" },
        ],
    },
    Question {
        id: "bq_deployment",
        text: "How do your services reach production today?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "never_deployed", label: "They haven't yet" },
            QuestionOption { id: "paas", label: "Managed platforms (PaaS)" },
            QuestionOption { id: "containers", label: "Containers I build myself" },
            QuestionOption { id: "orchestrated", label: "Orchestrated clusters" },
        ],
    },
    Question {
        id: "bq_focus",
        text: "Which part of backend work do you most want to improve?",
        kind: QuestionKind::FreeText,
        category: QuestionCategory::DomainSpecific,
        options: &[],
    },
];

const INFRASTRUCTURE_QUESTIONS: &[Question] = &[
    Question {
        id: "iq_os_experience",
        text: "How much Linux experience do you have?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "Little or none" },
            QuestionOption { id: "desktop", label: "Desktop use" },
            QuestionOption { id: "server_admin", label: "Administering servers" },
            QuestionOption { id: "automation", label: "Automating fleets" },
        ],
    },
    Question {
        id: "iq_cloud",
        text: "Which cloud providers have you used?",
        kind: QuestionKind::MultiSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "aws", label: "AWS" },
            QuestionOption { id: "gcp", label: "Google Cloud" },
            QuestionOption { id: "azure", label: "Azure" },
            QuestionOption { id: "none", label: "None yet" },
        ],
    },
    Question {
        id: "iq_containers",
        text: "How far does your container experience go?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "Not yet" },
            QuestionOption { id: "docker_basics", label: "Building and running images" },
            QuestionOption { id: "compose", label: "Multi-container setups" },
            QuestionOption { id: "kubernetes", label: "Kubernetes" },
        ],
    },
    Question {
        id: "iq_iac",
        text: "Do you manage infrastructure as code?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "Not yet" },
            QuestionOption { id: "scripts", label: "Ad hoc scripts" },
            QuestionOption { id: "terraform", label: "Terraform or similar" },
            QuestionOption { id: "gitops", label: "Full GitOps workflows" },
        ],
    },
    Question {
        id: "iq_monitoring",
        text: "How do you observe running systems?",
        kind: QuestionKind::SingleSelect,
        category: QuestionCategory::DomainSpecific,
        options: &[
            QuestionOption { id: "none", label: "I don't yet" },
            QuestionOption { id: "logs", label: "Reading logs" },
            QuestionOption { id: "metrics", label: "Dashboards and metrics" },
            QuestionOption { id: "slos", label: "Tracing and SLOs" },
        ],
    },
    Question {
        id: "iq_focus",
        text: "Which part of infrastructure work do you most want to improve?",
        kind: QuestionKind::FreeText,
        category: QuestionCategory::DomainSpecific,
        options: &[],
    },
];

pub(super) fn domain_questions(domain: DomainId) -> &'static [Question] {
    match domain {
        DomainId::Frontend => FRONTEND_QUESTIONS,
        DomainId::Backend => BACKEND_QUESTIONS,
        DomainId::Infrastructure => INFRASTRUCTURE_QUESTIONS,
    }
}
