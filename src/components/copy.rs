//! Marketing copy for the landing page.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// A getting-started step: lead-in text, linked text, link target, image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub lead: &'static str,
    pub link_text: &'static str,
    pub href: &'static str,
    pub image: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        lead: "Get the ",
        link_text: "Cloud Foundry CLI from Pivotal.",
        href: "https://docs.pivotal.io/pivotalcf/latest/cf-cli/",
        image: "/assets/step_1.svg",
    },
    Step {
        lead: "Download the ",
        link_text: "sample app from Github.",
        href: "https://github.com/cloudfoundry-samples/spring-music",
        image: "/assets/step_2.svg",
    },
    Step {
        lead: "Learn to ",
        link_text: "deploy an app.",
        href: "https://docs.pivotal.io/pivotalcf/latest/devguide/deploy-apps/deploy-app.html",
        image: "/assets/step_3.svg",
    },
];

pub fn brand_name(company: &str) -> String {
    format!("{company} Ignition")
}

/// Welcome speech bubble paragraphs.
pub fn intro_messages(company: &str) -> [String; 2] {
    [
        format!(
            "{company} is giving you a free playground to push (deploy) apps and experiment.  PCF uses orgs to organize things."
        ),
        "Orgs contain spaces, and each space can host apps.  You will get your very own org and can create as many spaces as you like."
            .to_owned(),
    ]
}

/// Spaces overview paragraphs.
pub fn space_messages(space: &str) -> [String; 2] {
    [
        format!("Spaces can act like environments, and your first space is called \"{space}\"."),
        "Once apps are pushed to a space, you can bind them to services like MySQL and NewRelic by visiting the \"Marketplace\" link in PCF."
            .to_owned(),
    ]
}
