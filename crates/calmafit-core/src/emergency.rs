//! Emergency contacts and mental-health resources.
//!
//! Static content shown on the profile screen and during the SOS flow.
//! Contacts follow the Brazilian support network the product ships with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Emergency,
    Health,
    Resource,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: Option<&'static str>,
    pub description: &'static str,
    pub website: Option<&'static str>,
    pub kind: ContactKind,
}

/// Emergency and support contacts, most urgent first.
pub fn contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            name: "CVV - Centro de Valorização da Vida",
            phone: Some("188"),
            description: "Emotional support and suicide prevention. Available 24h by phone, chat, and e-mail.",
            website: Some("https://www.cvv.org.br"),
            kind: ContactKind::Emergency,
        },
        EmergencyContact {
            name: "CAPS - Centro de Atenção Psicossocial",
            phone: Some("136"),
            description: "Free public mental-health care through SUS.",
            website: None,
            kind: ContactKind::Health,
        },
        EmergencyContact {
            name: "SAMU",
            phone: Some("192"),
            description: "Urgent medical emergencies.",
            website: None,
            kind: ContactKind::Emergency,
        },
        EmergencyContact {
            name: "Mapa da Saúde Mental",
            phone: None,
            description: "Find free or low-cost mental-health professionals and services.",
            website: Some("https://www.mapasaudemental.com.br"),
            kind: ContactKind::Resource,
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Guidance lists shown alongside the contacts.
pub fn resources() -> Vec<ResourceList> {
    vec![
        ResourceList {
            title: "When to seek professional help?",
            items: &[
                "Persistent feelings of sadness or anxiety",
                "Difficulty carrying out daily activities",
                "Thoughts of self-harm or suicide",
                "Drastic changes in sleep or appetite",
                "Prolonged social isolation",
            ],
        },
        ResourceList {
            title: "Kinds of professionals",
            items: &[
                "Psychologist: therapy and psychological follow-up",
                "Psychiatrist: diagnosis and medication when needed",
                "Occupational therapist: activities for well-being",
                "Social worker: support with social issues",
            ],
        },
    ]
}

/// Disclaimer shown on the profile screen.
pub const APP_DISCLAIMER: &str = "CalmaFit is a well-being support tool and does not replace \
professional care. In an emergency, seek help immediately.";

/// Disclaimer shown in the chat screen.
pub const AI_DISCLAIMER: &str = "This AI offers emotional support based on well-being \
techniques. For diagnosis and treatment, see a mental-health professional.";

/// Disclaimer shown during the SOS flow.
pub const CRISIS_DISCLAIMER: &str = "If you are in crisis or having suicidal thoughts, call \
CVV (188) right away. You are not alone.";
