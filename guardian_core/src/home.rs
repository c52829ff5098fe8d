//! # Home Page Content
//!
//! Static copy for the landing page, kept here so the GUI and CLI show the
//! same text.

use serde::{Deserialize, Serialize};

use crate::navigation::Page;
use crate::notifications::Notification;

pub const TITLE: &str = "Phoenix Safety Guardian";
pub const TAGLINE: &str = "Empowering women across India with AI-powered safety features";

/// A feature card linking to a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Page,
}

pub static FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "SOS Alert",
        description: "One-tap emergency alert system that sends your location to trusted contacts",
        link: Page::Safety,
    },
    FeatureCard {
        title: "Trusted Contacts",
        description: "Add and manage your emergency contacts for quick access",
        link: Page::Contacts,
    },
    FeatureCard {
        title: "Safe Routes",
        description: "Get suggestions for safer routes based on real-time data",
        link: Page::Routes,
    },
    FeatureCard {
        title: "Stealth Mode",
        description: "Activate distress signal discreetly without alerting others",
        link: Page::Safety,
    },
];

/// A "How It Works" step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HOW_IT_WORKS: [Step; 3] = [
    Step {
        number: 1,
        title: "Set Up Your Profile",
        description: "Create your account and add emergency contacts",
    },
    Step {
        number: 2,
        title: "Enable Permissions",
        description: "Grant location access for accurate safety features",
    },
    Step {
        number: 3,
        title: "Stay Protected",
        description: "Use SOS or stealth mode in emergency situations",
    },
];

/// Public helpline numbers on the "Need Immediate Help?" banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Helpline {
    /// Women helpline
    Women,
    /// National emergency number
    Emergency,
}

impl Helpline {
    pub const ALL: &'static [Helpline] = &[Helpline::Women, Helpline::Emergency];

    pub fn number(&self) -> &'static str {
        match self {
            Helpline::Women => "1090",
            Helpline::Emergency => "112",
        }
    }

    pub fn button_label(&self) -> String {
        format!("Call {}", self.number())
    }

    /// No telephony: dialing only announces itself
    pub fn dial(&self) -> Notification {
        tracing::info!(number = self.number(), "helpline call requested (simulated)");
        Notification::info(format!("Calling {} (simulated, no call placed)", self.number()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_links() {
        let links: Vec<_> = FEATURES.iter().map(|f| f.link).collect();
        assert_eq!(links, vec![Page::Safety, Page::Contacts, Page::Routes, Page::Safety]);
    }

    #[test]
    fn test_steps_are_numbered() {
        for (i, step) in HOW_IT_WORKS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
        }
    }

    #[test]
    fn test_helplines() {
        assert_eq!(Helpline::Women.button_label(), "Call 1090");
        assert_eq!(Helpline::Emergency.button_label(), "Call 112");
        assert!(Helpline::Emergency.dial().message.contains("112"));

        let json = serde_json::to_string(&Helpline::Women).unwrap();
        assert_eq!(serde_json::from_str::<Helpline>(&json).unwrap(), Helpline::Women);
    }
}
