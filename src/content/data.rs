//! The portfolio content.

use super::model::{
    Achievement, Contact, Education, Experience, Link, Portfolio, Profile, Project, SkillCategory,
    Stat,
};

const GITHUB: &str = "https://github.com/nishit3";
const LINKEDIN: &str = "https://www.linkedin.com/in/nishit-chaudhary-4ab0701b4/";
const LEETCODE: &str = "https://leetcode.com/u/Nishit_Chaudhary/";
const EMAIL: &str = "mailto:nishitchaudhary71@gmail.com";

pub static PROFILE: Profile = Profile {
    name: "Nishit Chaudhary",
    headline: "Software Development Engineer",
    subtitle: "MS Computer Science @ Northeastern University",
    tagline: "Building scalable systems | Deep Learning | Cloud Architecture | 4x Hackathon Winner",
    links: &[
        Link { label: "GitHub", url: GITHUB },
        Link { label: "LinkedIn", url: LINKEDIN },
        Link { label: "LeetCode", url: LEETCODE },
        Link { label: "Email", url: EMAIL },
    ],
    stats: &[
        Stat { label: "Available", value: "Summer 2026", note: None },
        Stat { label: "Location", value: "Boston, MA", note: None },
        Stat { label: "IEEE Publications", value: "2 Published", note: None },
        Stat { label: "DSA Problems", value: "500+ Solved", note: Some("LeetCode + GFG") },
    ],
};

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        company: "OPLinnovate",
        role: "Software Development Engineer Intern",
        period: "Jan 2025 - Jun 2025",
        location: "Ahmedabad, India",
        achievements: &[
            "Developed RESTful APIs using Java and Spring Boot for a fintech payment processing system handling 50,000+ daily transactions",
            "Reduced system latency by 30% through microservices architecture optimization and database query improvements",
            "Implemented design patterns (Factory, Singleton, Strategy) and unit testing achieving 85% code coverage",
            "Built monitoring dashboards and circuit breaker patterns to improve system reliability across microservices",
        ],
        tech: &["Java", "Spring Boot", "Microservices", "PostgreSQL", "REST APIs"],
        certificate_link: Some(
            "https://www.linkedin.com/in/nishit-chaudhary-4ab0701b4/overlay/1750319143259/single-media-viewer/?type=DOCUMENT&profileId=ACoAADHXucMBNz-ve-JFbNfZKlalqxt2kajRRJE",
        ),
    },
    Experience {
        company: "Jio Haptik (Reliance Jio)",
        role: "Deep Learning Intern",
        period: "May 2024 - July 2024",
        location: "Mumbai, India (Remote)",
        achievements: &[
            "Optimized CNN models using PyTorch for a conversational AI platform serving 5M+ daily users, improving accuracy from 84% to 92%",
            "Reduced model inference time by 40% through quantization and pruning techniques, improving response performance",
            "Experimented with neural network architectures and hyperparameter tuning to enhance intent classification performance",
            "Developed automated ML pipelines for efficient data preprocessing and model training workflows",
        ],
        tech: &["PyTorch", "CNN", "Python", "Deep Learning", "MLOps"],
        certificate_link: Some(
            "https://www.linkedin.com/in/nishit-chaudhary-4ab0701b4/overlay/1720351488422/single-media-viewer/?type=DOCUMENT&profileId=ACoAADHXucMBNz-ve-JFbNfZKlalqxt2kajRRJE",
        ),
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "EarthAlly",
        description: "End-to-end deep learning and IoT-based environment monitoring system using AWS cloud infrastructure (SageMaker, Lambda, S3, DynamoDB) for real-time predictions.",
        tech: &["AWS", "PyTorch", "React", "Flutter", "IoT"],
        github: "https://github.com/nishit3/EarthAlly",
        highlights: &[
            "Real-time data processing",
            "Multiple IoT sensors integration",
            "Predictive analytics",
        ],
        images: &[
            "/images/projects/earthally-1.png",
            "/images/projects/earthally-2.png",
            "/images/projects/earthally-3.png",
            "/images/projects/earthally-4.png",
            "/images/projects/earthally-5.png",
            "/images/projects/earthally-6.png",
            "/images/projects/earthally-7.png",
            "/images/projects/earthally-8.jpg",
            "/images/projects/earthally-9.jpg",
        ],
        video: None,
    },
    Project {
        title: "Advance Public Bus Transport Management System",
        description: "Computer vision and IoT-based smart platform for public bus passenger management using AWS Rekognition for facial recognition and Google Maps API.",
        tech: &["AWS Rekognition", "React", "Flutter", "IoT", "Google Maps API"],
        github: "https://ieeexplore.ieee.org/document/10444144",
        highlights: &[
            "IEEE ICCE 2024 Publication",
            "Live tracking system",
            "Passenger management dashboard",
        ],
        images: &[
            "/images/projects/bus-transport-1.jpg",
            "/images/projects/bus-transport-2.jpg",
        ],
        video: None,
    },
    Project {
        title: "Kisan-Sevak",
        description: "Deep Learning and IoT-based farming assistance and monitoring system for precision agriculture.",
        tech: &["Deep Learning", "React", "Flutter", "IoT", "Python"],
        github: "https://github.com/nishit3/Kisan-Sevak",
        highlights: &[
            "Farming assistance AI",
            "Remote monitoring",
            "Data-driven insights",
        ],
        images: &[
            "/images/projects/kisan-sevak-1.png",
            "/images/projects/kisan-sevak-2.jpg",
            "/images/projects/kisan-sevak-3.png",
        ],
        video: None,
    },
    Project {
        title: "ProStaff",
        description: "Enterprise-grade Human Resource Management System with microservices architecture. Features employee management, leave tracking, Razorpay salary payments, attendance system, and role-based access control with JWT authentication.",
        tech: &["Java", "Spring Boot", "Angular", "MySQL", "Razorpay", "Spring Cloud"],
        github: "https://github.com/nishit3/ProStaff",
        highlights: &[
            "14+ microservices with Eureka discovery",
            "Razorpay payment integration",
            "AWS-ready cloud architecture",
        ],
        images: &[
            "/images/projects/prostaff-1.png",
            "/images/projects/prostaff-2.png",
            "/images/projects/prostaff-3.png",
        ],
        video: None,
    },
    Project {
        title: "Neuronify",
        description: "Train Feed-Forward Artificial Neural Networks remotely with NO CODE! Democratizing ML model training.",
        tech: &["Flutter", "Python", "Neural Networks"],
        github: "https://github.com/nishit3/Neuronify",
        highlights: &[
            "No-code ML training",
            "Remote accessibility",
            "User-friendly interface",
        ],
        images: &[
            "/images/projects/neuronify-1.jpg",
            "/images/projects/neuronify-2.jpg",
            "/images/projects/neuronify-3.jpg",
        ],
        video: Some("/videos/neuronify-demo.mp4"),
    },
];

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "SAP-GTU Code Unnati Innovation Marathon 2024",
        award: "1st Place",
        detail: "500+ participants",
        images: &[
            "/images/achievements/sap-gtu-1.jpg",
            "/images/achievements/sap-gtu-2.jpg",
            "/images/achievements/sap-gtu-3.jpg",
            "/images/achievements/sap-gtu-4.jpg",
        ],
        link: None,
    },
    Achievement {
        title: "NASSCOM's The Maverick Effect AI Challenge 2024",
        award: "1st Place",
        detail: "National Level",
        images: &[
            "/images/achievements/nasscom-1.jpg",
            "/images/achievements/nasscom-2.jpg",
            "/images/achievements/nasscom-3.jpg",
            "/images/achievements/nasscom-4.jpg",
        ],
        link: None,
    },
    Achievement {
        title: "Hackout 2023 - DAIICT",
        award: "1st Place",
        detail: "DA-IICT Gandhinagar",
        images: &[
            "/images/achievements/hackout-1.jpg",
            "/images/achievements/hackout-2.jpg",
            "/images/achievements/hackout-3.jpg",
        ],
        link: None,
    },
    Achievement {
        title: "IEEE ICCE 2024 - Las Vegas",
        award: "Published",
        detail: "Smart Bus Transport System",
        images: &["/images/achievements/ieee-icce-1.png"],
        link: Some("https://ieeexplore.ieee.org/document/10444144"),
    },
    Achievement {
        title: "IEEE ICCCNT 2023 - Delhi",
        award: "Published",
        detail: "Air Pollution Monitoring System",
        images: &["/images/achievements/ieee-icccnt-1.jpg"],
        link: Some("https://ieeexplore.ieee.org/document/10306465"),
    },
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["Java", "Python", "JavaScript", "C++", "Kotlin"],
    },
    SkillCategory {
        name: "Backend",
        skills: &["Spring Boot", "Node.js", "RESTful APIs", "Microservices"],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["React", "Flutter"],
    },
    SkillCategory {
        name: "ML/DL",
        skills: &["PyTorch", "CNN", "FFANN", "GAN", "RNN", "AutoEncoders", "Neural Networks"],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        skills: &["AWS (SageMaker, Lambda, S3, DynamoDB, Rekognition)", "Docker", "Git"],
    },
    SkillCategory {
        name: "Databases",
        skills: &["MySQL", "PostgreSQL", "MongoDB", "DynamoDB"],
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        school: "Northeastern University",
        degree: "Master of Science in Computer Science",
        specialization: None,
        period: "Sept 2025 - Dec 2027",
        gpa: "GPA: 3.67/4.0",
        location: "Khoury College of Computer Sciences, Boston, MA",
        courses: "Relevant Courses: Programming Design Paradigm, Algorithms, Web Development",
    },
    Education {
        school: "Karnavati University",
        degree: "Bachelor of Technology in Computer Science Engineering",
        specialization: Some("Specialization in AI/ML"),
        period: "Graduated May 2025",
        gpa: "GPA: 8.61/10.0",
        location: "Gujarat, India",
        courses: "Relevant Courses: OOP, Data Structures, Databases, Software Engineering",
    },
];

pub static CONTACT: Contact = Contact {
    heading: "Let's Build Something Amazing",
    pitch: "I'm actively seeking Summer 2026 SDE internship opportunities. Let's connect!",
    links: &[
        Link { label: "Email Me", url: EMAIL },
        Link { label: "LinkedIn", url: LINKEDIN },
        Link { label: "GitHub", url: GITHUB },
    ],
    footer: "© 2026 Nishit Chaudhary. Built with Rust & crossterm.",
};

/// The compiled-in portfolio.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: &PROFILE,
        experience: EXPERIENCE,
        projects: PROJECTS,
        achievements: ACHIEVEMENTS,
        skills: SKILLS,
        education: EDUCATION,
        contact: &CONTACT,
    }
}
