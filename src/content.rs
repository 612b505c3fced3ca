//! Page copy, bundled as JSON so wording can change without touching the
//! components that render it.

use log::error;
use serde::Deserialize;

use crate::error::UiResult;

const BUNDLED: &str = include_str!("../assets/landing.json");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub nav_cta: String,
    pub hero: Hero,
    pub headings: Headings,
    pub curriculum: Vec<Card>,
    pub stats: Vec<Stat>,
    pub benefits: Vec<Card>,
    pub pricing: Vec<Plan>,
    pub faq: Vec<FaqEntry>,
    pub modal: ModalCopy,
    pub footer: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    /// When set, the secondary button is wrapped in a link and navigates
    /// instead of opening the enrollment modal.
    pub secondary_href: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Headings {
    pub curriculum: String,
    pub benefits: String,
    pub pricing: String,
    pub faq: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Stat {
    /// Raw `data-target` value. Kept as text so unparseable goals reach
    /// the markup untouched.
    pub target: String,
    /// Text shown before the counter starts.
    pub text: String,
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub cta: String,
    pub featured: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModalCopy {
    pub heading: String,
    pub text: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub phone_placeholder: String,
    pub submit: String,
    pub close_label: String,
    pub acknowledgment: String,
}

impl Default for ModalCopy {
    fn default() -> Self {
        ModalCopy {
            heading: "¡Comienza tu Carrera Hoy!".to_string(),
            text: "Completa el formulario para inscribirte al curso".to_string(),
            name_placeholder: "Nombre completo".to_string(),
            email_placeholder: "Email".to_string(),
            phone_placeholder: "Teléfono (opcional)".to_string(),
            submit: "Inscribirme Ahora".to_string(),
            close_label: "Cerrar".to_string(),
            acknowledgment: "¡Gracias por tu interés! Pronto recibirás más información.".to_string(),
        }
    }
}

impl PageContent {
    pub fn from_json(raw: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn bundled() -> UiResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// Bundled copy, or an empty page if the bundle does not decode.
    pub fn load() -> Self {
        match Self::bundled() {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to load page content: {}", e);
                Self::default()
            }
        }
    }
}
