//! Static catalog of career archetypes used by the keyword matcher.
//!
//! Keywords are matched as raw lower-case substrings, so very short tokens
//! ("go", "ai", "ui", "ml") are avoided: they would fire inside unrelated words.

use serde::Serialize;

/// A fixed, catalog-defined career description.
#[derive(Debug, Serialize)]
pub struct CareerArchetype {
    pub name: &'static str,
    pub description: &'static str,
    /// Lower-case match keywords, in priority order.
    pub keywords: &'static [&'static str],
    pub required_skills: &'static [&'static str],
    pub timeline: &'static str,
    pub resources: &'static [&'static str],
}

pub static CAREER_CATALOG: &[CareerArchetype] = &[
    CareerArchetype {
        name: "Frontend Developer",
        description: "Build responsive, accessible user interfaces for web applications.",
        keywords: &["javascript", "react", "html", "css", "frontend", "typescript", "vue", "angular"],
        required_skills: &["JavaScript", "React", "HTML", "CSS"],
        timeline: "6-9 months",
        resources: &[
            "https://developer.mozilla.org/en-US/docs/Learn",
            "https://react.dev/learn",
        ],
    },
    CareerArchetype {
        name: "Backend Developer",
        description: "Design APIs, services and databases that power applications.",
        keywords: &["backend", "rest api", "server", "database", "python", "django", "node", "spring boot", "sql"],
        required_skills: &["SQL", "REST APIs", "Python", "Docker"],
        timeline: "6-12 months",
        resources: &[
            "https://roadmap.sh/backend",
            "https://www.postgresql.org/docs/current/tutorial.html",
        ],
    },
    CareerArchetype {
        name: "Full Stack Developer",
        description: "Own features end to end, from the database to the browser.",
        keywords: &["full stack", "fullstack", "web development", "javascript", "react", "node", "mongodb"],
        required_skills: &["JavaScript", "Node.js", "React", "SQL"],
        timeline: "9-12 months",
        resources: &[
            "https://www.theodinproject.com",
            "https://fullstackopen.com/en/",
        ],
    },
    CareerArchetype {
        name: "Python Developer",
        description: "Write Python services, automation and tooling across domains.",
        keywords: &["python", "django", "flask", "fastapi", "automation", "scripting"],
        required_skills: &["Python", "Django", "Git"],
        timeline: "4-8 months",
        resources: &[
            "https://docs.python.org/3/tutorial/",
            "https://docs.djangoproject.com/en/stable/intro/",
        ],
    },
    CareerArchetype {
        name: "Data Scientist",
        description: "Turn data into insight with statistics, modelling and visualisation.",
        keywords: &["data science", "data analysis", "statistics", "analytics", "pandas", "numpy", "visualization", "python"],
        required_skills: &["Python", "Statistics", "SQL", "Pandas"],
        timeline: "9-15 months",
        resources: &[
            "https://www.kaggle.com/learn",
            "https://pandas.pydata.org/docs/getting_started/",
        ],
    },
    CareerArchetype {
        name: "Machine Learning Engineer",
        description: "Train, evaluate and deploy machine learning models in production.",
        keywords: &["machine learning", "deep learning", "tensorflow", "pytorch", "neural", "artificial intelligence"],
        required_skills: &["Python", "Machine Learning", "PyTorch", "Linear Algebra"],
        timeline: "12-18 months",
        resources: &[
            "https://www.coursera.org/specializations/machine-learning-introduction",
            "https://pytorch.org/tutorials/",
        ],
    },
    CareerArchetype {
        name: "UI/UX Designer",
        description: "Research users and design intuitive, delightful product experiences.",
        keywords: &["design", "ui/ux", "user experience", "user interface", "figma", "prototyping", "wireframe"],
        required_skills: &["Figma", "User Research", "Prototyping"],
        timeline: "6-9 months",
        resources: &[
            "https://www.nngroup.com/articles/",
            "https://help.figma.com/hc/en-us",
        ],
    },
    CareerArchetype {
        name: "DevOps Engineer",
        description: "Automate delivery pipelines and keep infrastructure reliable.",
        keywords: &["devops", "docker", "kubernetes", "ci/cd", "linux", "terraform", "infrastructure"],
        required_skills: &["Linux", "Docker", "Kubernetes", "CI/CD"],
        timeline: "9-12 months",
        resources: &[
            "https://roadmap.sh/devops",
            "https://kubernetes.io/docs/tutorials/",
        ],
    },
    CareerArchetype {
        name: "Cloud Engineer",
        description: "Architect and operate workloads on public cloud platforms.",
        keywords: &["cloud", "aws", "azure", "gcp", "serverless", "networking"],
        required_skills: &["AWS", "Networking", "Terraform"],
        timeline: "9-12 months",
        resources: &[
            "https://aws.amazon.com/training/",
            "https://learn.microsoft.com/en-us/training/azure/",
        ],
    },
    CareerArchetype {
        name: "Mobile App Developer",
        description: "Ship native and cross-platform apps for iOS and Android.",
        keywords: &["mobile", "android", "iphone", "flutter", "kotlin", "swift", "react native"],
        required_skills: &["Kotlin", "Swift", "Flutter"],
        timeline: "6-12 months",
        resources: &[
            "https://developer.android.com/courses",
            "https://docs.flutter.dev/get-started",
        ],
    },
    CareerArchetype {
        name: "Cybersecurity Analyst",
        description: "Protect systems by detecting, investigating and preventing threats.",
        keywords: &["security", "cyber", "network security", "ethical hacking", "penetration", "cryptography"],
        required_skills: &["Networking", "Linux", "Security+"],
        timeline: "9-15 months",
        resources: &[
            "https://tryhackme.com",
            "https://owasp.org/www-project-top-ten/",
        ],
    },
    CareerArchetype {
        name: "Product Manager",
        description: "Define what to build and why, aligning users, business and engineering.",
        keywords: &["product management", "product manager", "strategy", "roadmap", "stakeholder", "business", "leadership"],
        required_skills: &["Product Strategy", "Communication", "Analytics"],
        timeline: "6-12 months",
        resources: &[
            "https://www.svpg.com/articles/",
            "https://www.productplan.com/learn/",
        ],
    },
    CareerArchetype {
        name: "Digital Marketing Specialist",
        description: "Grow audiences through content, SEO, social and paid campaigns.",
        keywords: &["marketing", "seo", "social media", "content", "branding", "advertising"],
        required_skills: &["SEO", "Content Strategy", "Google Analytics"],
        timeline: "3-6 months",
        resources: &[
            "https://skillshop.withgoogle.com",
            "https://academy.hubspot.com",
        ],
    },
];
