//! Built-in page content

use super::{
    ContactBlurb, Content, EducationEntry, ExperienceEntry, LinkSet, Profile, Project,
    ProjectLink, SkillGroup,
};

const GITHUB: &str = "https://github.com/Abdallaheng2022";
const LINKEDIN: &str = "https://www.linkedin.com/in/abdallah-elbohy-b2b2aa113/";
const EMAIL: &str = "mailto:abdallah.ramzy.albohy.96@gmail.com";
const RESUME: &str =
    "https://drive.google.com/file/d/1mXMd_wh1gny7rHMkFv0poEdwnciy2I0g/view?usp=sharing";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn content() -> Content {
    Content {
        profile: Profile {
            name: "Abdallah Elbohy".to_string(),
            headline: "LLM & Generative AI Engineer".to_string(),
            intro: "MSc Computer Engineering with international experience across data \
                    science, NLP, and LLM\u{2011}RAG application design. I build multilingual, \
                    production\u{2011}ready AI systems that combine research, engineering, and \
                    infrastructure \u{2014} with an emphasis on citation\u{2011}first reliability, \
                    observability, and clean API contracts."
                .to_string(),
        },
        links: LinkSet {
            github: GITHUB.to_string(),
            linkedin: LINKEDIN.to_string(),
            email: EMAIL.to_string(),
            resume: RESUME.to_string(),
        },
        skills: vec![
            SkillGroup::new(
                "AI & ML",
                [
                    "LLM/RAG systems",
                    "NLP",
                    "Machine Learning",
                    "Deep Learning",
                    "OCR / Document AI",
                    "Recommendation Systems",
                ],
            ),
            SkillGroup::new(
                "Tech Stack",
                [
                    "Python",
                    "PyTorch/TensorFlow",
                    "Hugging Face",
                    "LangGraph / LangChain",
                    "FAISS / Qdrant",
                    "FastAPI",
                    "Airflow",
                    "MLflow / Langfuse",
                    "Docker",
                ],
            ),
        ],
        projects: vec![
            Project {
                title: "BelgeNavi \u{2014} Citation-First Assistant".to_string(),
                period: "2025".to_string(),
                summary: "Turns natural-language questions about Turkish administrative \
                          workflows (residence permits, NVI/address, MERS\u{130}S) into an \
                          actionable checklist with verified sources (URL + last seen). \
                          Multilingual TR/EN/AR."
                    .to_string(),
                highlights: strings(&[
                    "Agentic graph: Classifier \u{2192} Retriever \u{2192} Citer \u{2192} Checklist \u{2192} Form Preview \u{2192} Guardrails",
                    "RAG over curated snapshots; FAISS (per-language) with optional Qdrant",
                    "FastAPI API + minimal UI; observability via Langfuse; evals via RAGAS/MLflow",
                ]),
                stack: strings(&["Python", "LangGraph", "LangChain", "FAISS/Qdrant", "FastAPI"]),
                links: vec![
                    ProjectLink::new("GitHub", GITHUB),
                    ProjectLink::new("Project README", "#"),
                ],
            },
            Project {
                title: "TrialMatch \u{2014} First-Pass Clinical Trial Matcher".to_string(),
                period: "2025".to_string(),
                summary: "Asks a short patient profile and ranks ClinicalTrials.gov studies, \
                          returning Likely / Unlikely / Need-Info with concise reasons and \
                          official NCT links."
                    .to_string(),
                highlights: strings(&[
                    "Pipeline: Intake \u{2192} Trials Search \u{2192} Eligibility Parser \u{2192} Rule-based Matcher \u{2192} Explainer \u{2192} Guardrails",
                    "Vector search via FAISS; FastAPI endpoint (POST /match); Streamlit demo",
                    "Guardrails ensure decision set + disclaimer; transparent links to NCT",
                ]),
                stack: strings(&["Python", "FAISS", "FastAPI", "Streamlit"]),
                links: vec![
                    ProjectLink::new("GitHub", GITHUB),
                    ProjectLink::new("Project README", "#"),
                ],
            },
        ],
        experience: vec![ExperienceEntry {
            role: "LLM & Generative AI Engineer (Independent)".to_string(),
            period: "2024\u{2013}2025".to_string(),
            bullets: strings(&[
                "Designed and shipped multilingual agentic LLM+RAG micro-apps with clean APIs and observability.",
                "Built vector retrieval over curated snapshots; maintained freshness policies (TTL, last seen).",
                "Delivered demos and documentation suitable for production hardening.",
            ]),
        }],
        education: vec![EducationEntry {
            degree: "MSc \u{2014} Computer Engineering".to_string(),
            period: None,
            detail: "Graduate studies focused on data science, NLP, and applied machine learning."
                .to_string(),
        }],
        contact: ContactBlurb {
            text: "I\u{2019}m open to roles and projects in ".to_string(),
            emphasis: "LLM/RAG, agentic systems, and production AI".to_string(),
            closing: ". The fastest way to reach me is via email.".to_string(),
        },
    }
}
