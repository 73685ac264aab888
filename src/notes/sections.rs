//! The fixed, ordered set of meeting-note sections

use std::fmt;

/// One of the ten named categories notes are organised into.
///
/// Declaration order is rendering order. `ProjectKickoff` is the title block;
/// the other nine are body sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionName {
    ProjectKickoff,
    ClientVision,
    TargetMarket,
    SystemConcept,
    UserExperience,
    TechnicalConsiderations,
    CostAndPositioning,
    ProcessAndNextSteps,
    DecisionsMade,
    DataAndInsights,
}

impl SectionName {
    /// Every section, in rendering order.
    pub const ALL: [SectionName; 10] = [
        Self::ProjectKickoff,
        Self::ClientVision,
        Self::TargetMarket,
        Self::SystemConcept,
        Self::UserExperience,
        Self::TechnicalConsiderations,
        Self::CostAndPositioning,
        Self::ProcessAndNextSteps,
        Self::DecisionsMade,
        Self::DataAndInsights,
    ];

    /// The title label that opens every rendered document.
    pub const TITLE: SectionName = Self::ProjectKickoff;

    /// Human-readable label, also used as the JSON key in model replies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProjectKickoff => "Project Kickoff",
            Self::ClientVision => "Client Vision",
            Self::TargetMarket => "Target Market & Use Case",
            Self::SystemConcept => "System Concept & Architecture",
            Self::UserExperience => "User Experience & Installation",
            Self::TechnicalConsiderations => "Technical & Engineering Considerations",
            Self::CostAndPositioning => "Cost & Market Positioning",
            Self::ProcessAndNextSteps => "Project Process & Next Steps",
            Self::DecisionsMade => "Decisions Made",
            Self::DataAndInsights => "Data & Insights",
        }
    }

    /// What the model should put in this section.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ProjectKickoff => "Meeting title, date, attendees, contact info",
            Self::ClientVision => "Core ideas, problems being solved, vision",
            Self::TargetMarket => "Who will use this, pain points, market needs",
            Self::SystemConcept => "Technical approach, system design, components",
            Self::UserExperience => "How users interact, installation process",
            Self::TechnicalConsiderations => "Technical challenges, requirements, constraints",
            Self::CostAndPositioning => "Pricing, competitive analysis, market positioning",
            Self::ProcessAndNextSteps => "Process, timeline, immediate next steps",
            Self::DecisionsMade => "Concrete decisions reached during the meeting",
            Self::DataAndInsights => "Key metrics, data points, insights shared",
        }
    }

    /// Placeholder body used when the model reply cannot be parsed.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::ProjectKickoff => "Meeting details extracted from transcript",
            Self::ClientVision => "Vision and goals discussed in the meeting",
            Self::TargetMarket => "Target audience and use cases identified",
            Self::SystemConcept => "Technical approach and system design",
            Self::UserExperience => "User interaction and installation process",
            Self::TechnicalConsiderations => "Technical challenges and requirements",
            Self::CostAndPositioning => "Pricing and market analysis",
            Self::ProcessAndNextSteps => "Process and next steps",
            Self::DecisionsMade => "Key decisions reached",
            Self::DataAndInsights => "Important data points and insights",
        }
    }

    /// Look up a section by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Body sections, i.e. everything after the title block.
    pub fn body_sections() -> impl Iterator<Item = SectionName> {
        Self::ALL.into_iter().filter(|s| *s != Self::TITLE)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for section in SectionName::ALL {
            assert_eq!(SectionName::from_label(section.label()), Some(section));
        }
        assert_eq!(SectionName::from_label("Technical Considerations"), None);
    }

    #[test]
    fn body_sections_skip_title_and_keep_order() {
        let body: Vec<_> = SectionName::body_sections().collect();
        assert_eq!(body.len(), 9);
        assert_eq!(body[0], SectionName::ClientVision);
        assert_eq!(body[8], SectionName::DataAndInsights);
        assert!(!body.contains(&SectionName::ProjectKickoff));
    }

    #[test]
    fn all_is_sorted_by_declaration_order() {
        let mut sorted = SectionName::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionName::ALL);
    }
}
