// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label pools the generator draws from.

pub(crate) const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Operations",
    "Finance",
    "HR",
    "Legal",
    "Customer Success",
];

pub(crate) const LOCATIONS: &[&str] = &[
    "Remote",
    "New York, NY",
    "San Francisco, CA",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Chicago, IL",
    "Denver, CO",
];

pub(crate) const EMPLOYMENT_TYPES: &[&str] =
    &["Full-time", "Part-time", "Contract", "Internship"];

pub(crate) const SALARY_BANDS: &[&str] = &[
    "$50,000 - $70,000",
    "$70,000 - $90,000",
    "$90,000 - $120,000",
    "$120,000 - $150,000",
    "$150,000 - $200,000",
    "$200,000+",
];

// Title parts combine as "{descriptor} {area} {role}".
pub(crate) const TITLE_DESCRIPTORS: &[&str] = &[
    "Senior", "Lead", "Staff", "Principal", "Junior", "Associate", "Global", "Regional",
];

pub(crate) const TITLE_AREAS: &[&str] = &[
    "Platform",
    "Infrastructure",
    "Data",
    "Product",
    "Growth",
    "Security",
    "Brand",
    "Accounts",
    "Markets",
    "Research",
    "Operations",
    "Solutions",
];

pub(crate) const TITLE_ROLES: &[&str] = &[
    "Engineer",
    "Developer",
    "Architect",
    "Analyst",
    "Designer",
    "Manager",
    "Strategist",
    "Consultant",
    "Specialist",
    "Coordinator",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Ada", "Amara", "Andre", "Bianca", "Carlos", "Dmitri", "Elena", "Farah", "Gustav", "Hana",
    "Ibrahim", "Ingrid", "Jamal", "Keiko", "Liam", "Mei", "Noor", "Oscar", "Priya", "Quinn",
    "Rosa", "Santiago", "Tomas", "Yuki",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Almeida", "Bauer", "Chen", "Dubois", "Eriksen", "Fernandez", "Garcia", "Haddad", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Quintero",
    "Rossi", "Singh", "Tanaka", "Umarov", "Vasquez", "Weber", "Yilmaz",
];

pub(crate) const CHOICE_OPTIONS: &[&str] = &["Option A", "Option B", "Option C", "Option D"];

pub(crate) const TAGS: &[&str] = &[
    "Software Engineer",
    "Software Developer",
    "Full Stack Developer",
    "Front End Developer",
    "Back End Developer",
    "Web Developer",
    "Mobile Developer",
    "iOS Developer",
    "Android Developer",
    "DevOps Engineer",
    "Cloud Engineer",
    "AWS",
    "Azure",
    "Google Cloud Platform (GCP)",
    "Data Scientist",
    "Data Analyst",
    "Machine Learning Engineer",
    "AI Engineer",
    "Artificial Intelligence",
    "Deep Learning",
    "Natural Language Processing (NLP)",
    "Computer Vision",
    "Big Data Engineer",
    "Database Administrator (DBA)",
    "SQL",
    "NoSQL",
    "Cybersecurity Analyst",
    "Information Security",
    "Penetration Tester",
    "Security Engineer",
    "Network Engineer",
    "Systems Administrator",
    "IT Support Specialist",
    "Technical Support",
    "Project Manager (Tech)",
    "Scrum Master",
    "Product Manager (Tech)",
    "Business Analyst (Tech)",
    "UX Designer",
    "UI Designer",
    "User Experience",
    "User Interface",
    "Quality Assurance (QA)",
    "Software Tester",
    "Automation Testing",
    "Embedded Systems Engineer",
    "Firmware Developer",
    "Computer Architect",
    "Research Scientist (CS)",
    "Academic Researcher (CS)",
    "Algorithm Developer",
    "Distributed Systems",
    "Blockchain Developer",
    "Game Developer",
    "AR/VR Developer",
    "C++",
    "Java",
    "Python",
    "JavaScript",
    "TypeScript",
    "Go",
    "Rust",
    "C#",
    ".NET",
    "PHP",
    "Ruby",
    "Swift",
    "Kotlin",
    "Scala",
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express.js",
    "Django",
    "Flask",
    "Spring Boot",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "CI/CD",
    "Agile",
    "Waterfall",
    "Linux",
    "Unix",
    "Windows Server",
    "Cloud Computing",
    "Data Mining",
    "Statistical Modeling",
    "MERN Stack",
    "MEAN Stack",
    "PERN Stack",
    "Fullstack",
    "Backend",
    "Frontend",
    "SRE (Site Reliability Engineer)",
    "Technical Writer (CS)",
    "Solutions Architect",
    "Enterprise Architect",
    "Machine Learning Operations (MLOps)",
    "Data Engineering",
    "Data Warehousing",
];
