//! The fixed lines the character speaks.

use hoi_core::Hand;

use super::config::Locale;

/// A line spoken at a fixed point of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    /// Invitation to throw a hand.
    RoundPrompt,
    /// The janken chant ending in the player's hand.
    Chant(Hand),
    /// Both hands were equal.
    Tie,
    /// The player won janken and now points.
    PlayerPoints,
    /// The CPU won janken and now points.
    CpuPoints,
    /// The pointing round begins.
    PointingPrompt,
    /// A direction was committed.
    Hoi,
    /// The player pointed where the CPU looked.
    PlayerWins,
    /// The CPU pointed where the player looked.
    PlayerLoses,
    /// The directions differed.
    NoDecision,
}

impl Phrase {
    /// Render the phrase in the given locale.
    pub fn text(self, locale: Locale) -> String {
        match locale {
            Locale::Japanese => self.japanese(),
            Locale::English => self.english(),
        }
    }

    fn japanese(self) -> String {
        match self {
            Self::RoundPrompt => "じゃんけんをしてください".into(),
            Self::Chant(hand) => format!("じゃんけん{}！", hand.label_ja()),
            Self::Tie => "あいこ！もう一度".into(),
            Self::PlayerPoints => "あなたの勝ち！指して！".into(),
            Self::CpuPoints => "CPUの勝ち。首を向けて！".into(),
            Self::PointingPrompt => "あっちむいてほい".into(),
            Self::Hoi => "ほい！".into(),
            Self::PlayerWins => "おめでとう、あなたの勝ちです".into(),
            Self::PlayerLoses => "残念、あなたの負けです".into(),
            Self::NoDecision => "はずれ！ポイントなし".into(),
        }
    }

    fn english(self) -> String {
        match self {
            Self::RoundPrompt => "Let's play rock-paper-scissors!".into(),
            Self::Chant(hand) => format!("Rock, paper, scissors... {hand}!"),
            Self::Tie => "It's a tie! Once more.".into(),
            Self::PlayerPoints => "You won! Point!".into(),
            Self::CpuPoints => "CPU won. Turn your head!".into(),
            Self::PointingPrompt => "Look that way!".into(),
            Self::Hoi => "Hoi!".into(),
            Self::PlayerWins => "Congratulations, you win!".into(),
            Self::PlayerLoses => "Too bad, you lose.".into(),
            Self::NoDecision => "Missed! No point this time.".into(),
        }
    }

    /// Every phrase the character can speak, chants included.
    pub fn catalog() -> Vec<Phrase> {
        let mut all = vec![Self::RoundPrompt];
        all.extend(Hand::ALL.into_iter().map(Self::Chant));
        all.extend([
            Self::Tie,
            Self::PlayerPoints,
            Self::CpuPoints,
            Self::PointingPrompt,
            Self::Hoi,
            Self::PlayerWins,
            Self::PlayerLoses,
            Self::NoDecision,
        ]);
        all
    }

    /// Short identifier, stable across locales.
    pub fn key(self) -> &'static str {
        match self {
            Self::RoundPrompt => "round-prompt",
            Self::Chant(Hand::Rock) => "chant-rock",
            Self::Chant(Hand::Scissors) => "chant-scissors",
            Self::Chant(Hand::Paper) => "chant-paper",
            Self::Tie => "tie",
            Self::PlayerPoints => "player-points",
            Self::CpuPoints => "cpu-points",
            Self::PointingPrompt => "pointing-prompt",
            Self::Hoi => "hoi",
            Self::PlayerWins => "player-wins",
            Self::PlayerLoses => "player-loses",
            Self::NoDecision => "no-decision",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chant_names_the_hand() {
        assert_eq!(Phrase::Chant(Hand::Rock).text(Locale::Japanese), "じゃんけんグー！");
        assert_eq!(
            Phrase::Chant(Hand::Paper).text(Locale::English),
            "Rock, paper, scissors... paper!"
        );
    }

    #[test]
    fn no_decision_does_not_announce_a_restart() {
        assert_eq!(Phrase::NoDecision.text(Locale::Japanese), "はずれ！ポイントなし");
        assert_eq!(
            Phrase::NoDecision.text(Locale::English),
            "Missed! No point this time."
        );
    }

    #[test]
    fn catalog_keys_are_unique() {
        let catalog = Phrase::catalog();
        assert_eq!(catalog.len(), 12);
        let mut keys: Vec<_> = catalog.iter().map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn every_phrase_renders_in_both_locales() {
        for phrase in Phrase::catalog() {
            assert!(!phrase.text(Locale::Japanese).is_empty());
            assert!(!phrase.text(Locale::English).is_empty());
        }
    }
}
