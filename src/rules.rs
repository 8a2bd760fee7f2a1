use crate::cards::Card;

/// Whether `card` may be played onto `top`.
///
/// A Superconduction in the hand beats everything. Otherwise the cards
/// must share a suit, or share a trailing segment of the same kind:
/// rank against rank, special kind against special kind. A normal rank
/// never matches a special kind even when the text would line up, and a
/// Superconduction on the table offers no suit or segment to match.
pub fn is_compatible(card: &Card, top: &Card) -> bool {
    if matches!(card, Card::Superconduction) {
        return true;
    }
    suits_match(card, top) || tails_match(card, top)
}

fn suits_match(card: &Card, top: &Card) -> bool {
    match (card.suit(), top.suit()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn tails_match(card: &Card, top: &Card) -> bool {
    match (card, top) {
        (Card::Normal { rank: a, .. }, Card::Normal { rank: b, .. }) => a == b,
        (Card::Special { kind: a, .. }, Card::Special { kind: b, .. }) => a == b,
        _ => false,
    }
}

/// Per-card legality of `hand` against `top`, in hand order. The caller
/// pairs the mask with the hand it passed in, so order is load-bearing.
pub fn legal_moves(top: &Card, hand: &[Card]) -> Vec<bool> {
    hand.iter().map(|card| is_compatible(card, top)).collect()
}

/// Identity-string variant of [`legal_moves`] for callers that deal in
/// raw card labels. Anything unparseable is reported illegal rather
/// than failing the whole mask.
pub fn legal_moves_by_identity<S: AsRef<str>>(top: &str, hand: &[S]) -> Vec<bool> {
    let Ok(top) = Card::from_identity(top) else {
        return vec![false; hand.len()];
    };
    hand.iter()
        .map(|identity| match Card::from_identity(identity.as_ref()) {
            Ok(card) => is_compatible(&card, &top),
            Err(_) => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn card(identity: &str) -> Card {
        Card::from_identity(identity).unwrap()
    }

    #[rstest]
    // Suit matches
    #[case("T_4", "T_1", true)]
    #[case("T_4", "T_cr", true)]
    #[case("C_su", "C_3", true)]
    #[case("X_en", "X_te", true)]
    // Trailing segment matches
    #[case("T_4", "C_4", true)]
    #[case("R_cr", "X_cr", true)]
    // Same-text segments of different kinds never match
    #[case("T_1", "C_cr", false)]
    #[case("R_sp", "X_2", false)]
    // Plain mismatches
    #[case("T_4", "C_5", false)]
    #[case("R_cr", "T_su", false)]
    // Superconduction in hand is always playable
    #[case("super", "T_4", true)]
    #[case("super", "X_te", true)]
    #[case("super", "super", true)]
    // Superconduction on the table matches nothing else
    #[case("T_4", "super", false)]
    #[case("X_te", "super", false)]
    fn test_is_compatible(#[case] hand_card: &str, #[case] top: &str, #[case] legal: bool) {
        assert_eq!(is_compatible(&card(hand_card), &card(top)), legal);
    }

    #[test]
    fn test_legal_moves_keeps_hand_order() {
        let top = card("T_4");
        let hand = vec![
            card("T_2"),
            card("C_3"),
            card("X_4"),
            card("super"),
            card("R_4"),
        ];

        assert_eq!(
            legal_moves(&top, &hand),
            vec![true, false, true, true, true]
        );
    }

    #[test]
    fn test_legal_moves_on_empty_hand() {
        assert!(legal_moves(&card("T_4"), &[]).is_empty());
    }

    #[test]
    fn test_legal_moves_by_identity() {
        let hand = ["T_2", "C_3", "X_4", "super", "R_4"];
        assert_eq!(
            legal_moves_by_identity("T_4", &hand),
            vec![true, false, true, true, true]
        );
    }

    #[test]
    fn test_legal_moves_by_identity_with_bad_labels() {
        // A bad hand entry is illegal, not an error
        let hand = ["T_2", "garbage", "T_cr"];
        assert_eq!(
            legal_moves_by_identity("T_4", &hand),
            vec![true, false, true]
        );

        // A bad top blanks the whole mask but keeps its length
        assert_eq!(
            legal_moves_by_identity("nope", &hand),
            vec![false, false, false]
        );
    }
}
