use crate::modules::matches::core::match_record::Match;

/// A single in-match occurrence that touches exactly one field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchIncident {
    Goal,
    YellowCard,
    RedCard,
    ExtraTime,
}

impl MatchIncident {
    pub fn apply(self, record: &mut Match) {
        match self {
            MatchIncident::Goal => record.home_goals = record.home_goals.saturating_add(1),
            MatchIncident::YellowCard => {
                record.yellow_cards = record.yellow_cards.saturating_add(1)
            }
            MatchIncident::RedCard => record.red_cards = record.red_cards.saturating_add(1),
            MatchIncident::ExtraTime => record.extra_time = true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchIncident::Goal => "goal",
            MatchIncident::YellowCard => "yellow_card",
            MatchIncident::RedCard => "red_card",
            MatchIncident::ExtraTime => "extra_time",
        }
    }
}
