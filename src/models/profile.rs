use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// The content record every section renders from. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub role: String,
    pub location: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub leetcode: String,
    /// Year printed in the footer. Falls back to the current year.
    #[serde(default)]
    pub copyright_year: Option<i32>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Category → skills, in display order.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub education: Education,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub cgpa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub link: String,
}

impl ProfileData {
    /// Parse a profile from TOML. `origin` only labels errors.
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|source| FolioError::ProfileParse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::ProfileIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    /// Load from `path` when given, otherwise (or on failure) use the built-in profile.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(profile) => {
                log::info!("Loaded profile for {} from {}", profile.name, path.display());
                profile
            }
            Err(e) => {
                log::warn!("{}; using built-in profile", e);
                Self::builtin()
            }
        }
    }

    /// First whitespace-separated word of the name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    pub fn footer_year(&self) -> i32 {
        use chrono::Datelike;
        self.copyright_year.unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// The profile the site ships with.
    pub fn builtin() -> Self {
        let s = |v: &str| v.to_string();
        let list = |items: &[&str]| items.iter().map(|v| v.to_string()).collect::<Vec<_>>();

        ProfileData {
            name: s("Albin Reji"),
            role: s("Full Stack Developer"),
            location: s("Udupi, Karnataka, India"),
            summary: s("Full Stack Developer with expertise in Java, Spring Boot, and React. Proven track record in building secure REST APIs and microservices using Spring Security and JWT. Skilled in PostgreSQL optimization and integrating AI services for scalable web applications."),
            email: s("albinrejim30@gmail.com"),
            phone: s("+91-8123160330"),
            github: s("https://github.com/Albin-Reji"),
            linkedin: s("https://linkedin.com/in/albin-reji"),
            leetcode: s("https://leetcode.com/u/Albin-Reji/"),
            stats: [("8.5", "CGPA"), ("2+", "Years Exp"), ("5+", "Projects"), ("96%", "ML Accuracy")]
                .into_iter()
                .map(|(value, label)| Stat { value: s(value), label: s(label) })
                .collect(),
            skills: vec![
                SkillCategory {
                    category: s("Programming Languages"),
                    skills: list(&["Java", "Python", "JavaScript (ES6+)", "SQL", "C++"]),
                },
                SkillCategory {
                    category: s("Frameworks & Libraries"),
                    skills: list(&["Spring Boot", "Spring Security", "Hibernate", "React.js", "JUnit"]),
                },
                SkillCategory {
                    category: s("Architecture & Protocols"),
                    skills: list(&["Microservices", "RESTful APIs", "WebSocket", "JWT Auth", "MVC"]),
                },
                SkillCategory {
                    category: s("Databases"),
                    skills: list(&["PostgreSQL", "MySQL", "MongoDB"]),
                },
                SkillCategory {
                    category: s("DevOps & Tools"),
                    skills: list(&["Docker", "Git/GitHub", "Jenkins", "Linux", "Maven", "Postman"]),
                },
                SkillCategory {
                    category: s("Core Concepts"),
                    skills: list(&["Data Structures & Algorithms", "OOP", "SDLC", "Machine Learning"]),
                },
            ],
            experience: vec![
                Experience {
                    title: s("Software Developer Intern"),
                    company: s("Udupi Web Solutions"),
                    location: s("Udupi, India"),
                    period: s("Feb 2025 – May 2025"),
                    achievements: list(&[
                        "Engineered a full-stack AI chat platform using Spring Boot and ReactJS, utilizing Maven for build automation within a scalable Microservices architecture",
                        "Integrated AI-powered APIs to enhance conversational accuracy and built optimized REST endpoints for seamless real-time messaging",
                        "Implemented a hybrid data storage strategy using PostgreSQL for relational user data and MongoDB for unstructured chat logs, managed via Git version control",
                    ]),
                },
                Experience {
                    title: s("Data Science Intern"),
                    company: s("Saara IT Solutions Pvt Ltd"),
                    location: s("Heart Attack Disease Prediction Project"),
                    period: s("Oct 2023 – Nov 2023"),
                    achievements: list(&[
                        "Developed a Machine Learning model in Python, achieving 96% accuracy using Scikit-learn and Pandas with advanced data preprocessing",
                        "Analyzed and visualized complex healthcare data to communicate insights to clinical stakeholders, enabling data-driven decision-making",
                        "Implemented an end-to-end ML pipeline with feature engineering, model validation, and performance optimization",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    title: s("Real-Time Chat Application"),
                    description: s("Developed a real-time messaging tool utilizing Spring Boot and WebSocket for persistent, stateful client-server connections with optimized bandwidth usage."),
                    tech: list(&["Java", "Spring Boot", "WebSocket", "STOMP"]),
                    link: s("#"),
                },
                Project {
                    title: s("Virtual Time Capsule"),
                    description: s("Engineered a scheduling system with automated delivery using Spring Boot Task Scheduler and Cron Jobs. Implemented JWT authentication and normalized PostgreSQL schema."),
                    tech: list(&["Spring Boot", "Spring Security", "JWT", "PostgreSQL"]),
                    link: s("#"),
                },
            ],
            education: Education {
                degree: s("Bachelor of Engineering in Computer Science & Engineering"),
                institution: s("Mangalore Institute of Technology & Engineering"),
                period: s("Nov 2021 – May 2025"),
                cgpa: s("8.5/10"),
            },
            certifications: vec![
                Certification {
                    name: s("Java Spring Framework 6 with Spring Boot 3"),
                    issuer: s("Udemy"),
                    link: s("#"),
                },
                Certification {
                    name: s("100 Days of Code: Python Bootcamp"),
                    issuer: s("Udemy"),
                    link: s("#"),
                },
            ],
            copyright_year: Some(2025),
        }
    }
}
