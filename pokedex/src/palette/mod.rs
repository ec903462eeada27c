//! Display colors and abbreviations for pokemon types and stats
//!
//! Pure lookup tables keyed by the lowercased resource name. Unknown names
//! never fail; they map to the documented fallback.

use catalog_types::NamedResource;

/// An ARGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

#[allow(clippy::cast_possible_truncation)]
impl Color {
    /// Fallback for unknown type names
    pub const BLACK: Self = Self::argb(0xFF00_0000);
    /// Fallback for unknown stat names
    pub const WHITE: Self = Self::argb(0xFFFF_FFFF);

    /// Color from a packed `0xAARRGGBB` value
    #[must_use]
    pub const fn argb(value: u32) -> Self {
        Self(value)
    }

    /// The packed `0xAARRGGBB` value
    #[must_use]
    pub const fn as_argb(self) -> u32 {
        self.0
    }

    /// Alpha channel
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Display color for the "normal" type
pub const TYPE_NORMAL: Color = Color::argb(0xFFA8_A77A);
/// Display color for the "fire" type
pub const TYPE_FIRE: Color = Color::argb(0xFFEE_8130);
/// Display color for the "water" type
pub const TYPE_WATER: Color = Color::argb(0xFF63_90F0);
/// Display color for the "electric" type
pub const TYPE_ELECTRIC: Color = Color::argb(0xFFF7_D02C);
/// Display color for the "grass" type
pub const TYPE_GRASS: Color = Color::argb(0xFF7A_C74C);
/// Display color for the "ice" type
pub const TYPE_ICE: Color = Color::argb(0xFF96_D9D6);
/// Display color for the "fighting" type
pub const TYPE_FIGHTING: Color = Color::argb(0xFFC2_2E28);
/// Display color for the "poison" type
pub const TYPE_POISON: Color = Color::argb(0xFFA3_3EA1);
/// Display color for the "ground" type
pub const TYPE_GROUND: Color = Color::argb(0xFFE2_BF65);
/// Display color for the "flying" type
pub const TYPE_FLYING: Color = Color::argb(0xFFA9_8FF3);
/// Display color for the "psychic" type
pub const TYPE_PSYCHIC: Color = Color::argb(0xFFF9_5587);
/// Display color for the "bug" type
pub const TYPE_BUG: Color = Color::argb(0xFFA6_B91A);
/// Display color for the "rock" type
pub const TYPE_ROCK: Color = Color::argb(0xFFB6_A136);
/// Display color for the "ghost" type
pub const TYPE_GHOST: Color = Color::argb(0xFF73_5797);
/// Display color for the "dragon" type
pub const TYPE_DRAGON: Color = Color::argb(0xFF6F_35FC);
/// Display color for the "dark" type
pub const TYPE_DARK: Color = Color::argb(0xFF70_5746);
/// Display color for the "steel" type
pub const TYPE_STEEL: Color = Color::argb(0xFFB7_B7CE);
/// Display color for the "fairy" type
pub const TYPE_FAIRY: Color = Color::argb(0xFFD6_85AD);

/// Display color for the "hp" stat
pub const STAT_HP: Color = Color::argb(0xFFFF_5959);
/// Display color for the "attack" stat
pub const STAT_ATTACK: Color = Color::argb(0xFFF5_AC78);
/// Display color for the "defense" stat
pub const STAT_DEFENSE: Color = Color::argb(0xFFFA_E078);
/// Display color for the "special-attack" stat
pub const STAT_SPECIAL_ATTACK: Color = Color::argb(0xFF9D_B7F5);
/// Display color for the "special-defense" stat
pub const STAT_SPECIAL_DEFENSE: Color = Color::argb(0xFFA7_DB8D);
/// Display color for the "speed" stat
pub const STAT_SPEED: Color = Color::argb(0xFFFA_92B2);

/// Display color for a pokemon type, [`Color::BLACK`] for unknown names
#[must_use]
pub fn type_color(type_ref: &NamedResource) -> Color {
    match type_ref.name.to_lowercase().as_str() {
        "normal" => TYPE_NORMAL,
        "fire" => TYPE_FIRE,
        "water" => TYPE_WATER,
        "electric" => TYPE_ELECTRIC,
        "grass" => TYPE_GRASS,
        "ice" => TYPE_ICE,
        "fighting" => TYPE_FIGHTING,
        "poison" => TYPE_POISON,
        "ground" => TYPE_GROUND,
        "flying" => TYPE_FLYING,
        "psychic" => TYPE_PSYCHIC,
        "bug" => TYPE_BUG,
        "rock" => TYPE_ROCK,
        "ghost" => TYPE_GHOST,
        "dragon" => TYPE_DRAGON,
        "dark" => TYPE_DARK,
        "steel" => TYPE_STEEL,
        "fairy" => TYPE_FAIRY,
        _ => Color::BLACK,
    }
}

/// Display color for a base stat, [`Color::WHITE`] for unknown names
#[must_use]
pub fn stat_color(stat: &NamedResource) -> Color {
    match stat.name.to_lowercase().as_str() {
        "hp" => STAT_HP,
        "attack" => STAT_ATTACK,
        "defense" => STAT_DEFENSE,
        "special-attack" => STAT_SPECIAL_ATTACK,
        "special-defense" => STAT_SPECIAL_DEFENSE,
        "speed" => STAT_SPEED,
        _ => Color::WHITE,
    }
}

/// Short display code for a base stat, empty for unknown names
#[must_use]
pub fn stat_abbreviation(stat: &NamedResource) -> &'static str {
    match stat.name.to_lowercase().as_str() {
        "hp" => "HP",
        "attack" => "Atk",
        "defense" => "Def",
        "special-attack" => "SpAtk",
        "special-defense" => "SpDef",
        "speed" => "Spd",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn maps_known_types_case_insensitively() {
        assert_eq!(type_color(&named("grass")), TYPE_GRASS);
        assert_eq!(type_color(&named("FIRE")), TYPE_FIRE);
        assert_eq!(type_color(&named("Water")), TYPE_WATER);
    }

    #[test]
    fn unknown_type_falls_back_to_black() {
        assert_eq!(type_color(&named("???")), Color::BLACK);
        assert_eq!(type_color(&named("")), Color::BLACK);
    }

    #[test]
    fn maps_known_stats() {
        assert_eq!(stat_color(&named("hp")), STAT_HP);
        assert_eq!(stat_color(&named("SPECIAL-ATTACK")), STAT_SPECIAL_ATTACK);
        assert_eq!(stat_abbreviation(&named("special-defense")), "SpDef");
        assert_eq!(stat_abbreviation(&named("Speed")), "Spd");
    }

    #[test]
    fn unknown_stat_falls_back() {
        assert_eq!(stat_color(&named("evasion")), Color::WHITE);
        assert_eq!(stat_abbreviation(&named("evasion")), "");
    }

    #[test]
    fn lookups_are_deterministic() {
        let input = named("psychic");
        assert_eq!(type_color(&input), type_color(&input));
    }

    #[test]
    fn color_channels_unpack() {
        let color = Color::argb(0xFF7A_C74C);
        assert_eq!(color.alpha(), 0xFF);
        assert_eq!(color.red(), 0x7A);
        assert_eq!(color.green(), 0xC7);
        assert_eq!(color.blue(), 0x4C);
    }
}
