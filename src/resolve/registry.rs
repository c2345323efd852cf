//! Host content registry
//!
//! The host game owns the real card, relic and potion objects. The arena only
//! knows their IDs, so everything that turns an ID into an object goes
//! through this trait.

use crate::loadout::CardType;

/// Color suffixes the host game appends to basic card IDs
pub const COLOR_SUFFIXES: [&str; 4] = ["_R", "_G", "_B", "_P"];

/// Lookup of host objects by ID
pub trait ContentRegistry {
    type Card;
    type Relic;
    type Potion;

    /// Fresh copy of the card with this ID
    fn card(&self, id: &str) -> Option<Self::Card>;
    /// Upgrade a card in place; false if it cannot be upgraded
    fn upgrade(&self, card: &mut Self::Card) -> bool;
    fn card_type(&self, card: &Self::Card) -> CardType;
    fn relic(&self, id: &str) -> Option<Self::Relic>;
    fn potion(&self, id: &str) -> Option<Self::Potion>;

    fn has_card(&self, id: &str) -> bool {
        self.card(id).is_some()
    }
}

/// Look up a card, retrying legacy `Strike`/`Defend` IDs with each color
/// suffix
pub fn lookup_card<Reg: ContentRegistry + ?Sized>(registry: &Reg, id: &str) -> Option<Reg::Card> {
    if let Some(card) = registry.card(id) {
        return Some(card);
    }
    if id == "Strike" || id == "Defend" {
        return COLOR_SUFFIXES
            .iter()
            .find_map(|suffix| registry.card(&format!("{}{}", id, suffix)));
    }
    None
}

/// "Talk to the Hand" -> "TalkToTheHand"
pub fn to_camel_case(input: &str) -> String {
    input
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Guess the ID a mistyped card was meant to have
pub fn suggest_card_id<Reg: ContentRegistry + ?Sized>(registry: &Reg, failed_id: &str) -> Option<String> {
    if failed_id.contains(' ') {
        let camel = to_camel_case(failed_id);
        if registry.has_card(&camel) {
            return Some(camel);
        }
    }

    if failed_id.contains('_') {
        let stripped = failed_id.replace('_', "");
        if registry.has_card(&stripped) {
            return Some(stripped);
        }
    }

    COLOR_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{}", failed_id, suffix))
        .find(|candidate| registry.has_card(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("Talk to the Hand"), "TalkToTheHand");
        assert_eq!(to_camel_case("  wheel  kick "), "WheelKick");
        assert_eq!(to_camel_case("Eruption"), "Eruption");
        assert_eq!(to_camel_case(""), "");
    }
}
