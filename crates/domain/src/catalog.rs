// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data compiled into the program.
//!
//! Exactly one fixed catalog of events, characters, nations, and bonus
//! rules exists. A tournament may restrict itself to a subset of the events
//! but cannot invent new entries, and none of these tables change at
//! runtime.

use crate::types::{BonusId, Character, EventId, Nation, Placement};

/// A selectable tournament event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpec {
    /// Stable identifier used to key result mappings.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Placement points from this event are doubled.
    pub double_points: bool,
}

/// When during the night a bonus rule is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardTiming {
    /// Voted or assigned at the end of the night.
    EndOfNight,
    /// Can be awarded once per event.
    PerEvent,
    /// Secret rule revealed at the mid-night break.
    MidNightReveal,
    /// Assignable by the MC at any moment.
    RealTime,
}

impl AwardTiming {
    /// Display label for this timing.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EndOfNight => "Fine serata",
            Self::PerEvent => "Ogni evento",
            Self::MidNightReveal => "Metà serata",
            Self::RealTime => "In tempo reale",
        }
    }
}

/// A discretionary bonus award rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusSpec {
    /// Stable identifier used to key bonus ledgers.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Points granted while the award is active.
    pub points: u32,
    /// What the award is for.
    pub description: &'static str,
    /// When during the night the award is handed out.
    pub awarded: AwardTiming,
}

/// The fixed event catalog, in schedule order.
pub static EVENTS: [EventSpec; 6] = [
    EventSpec {
        id: "ski_jump",
        name: "Salto con gli Sci",
        icon: "🎿",
        double_points: false,
    },
    EventSpec {
        id: "bobsleigh",
        name: "Bob",
        icon: "🛷",
        double_points: false,
    },
    EventSpec {
        id: "curling",
        name: "Curling",
        icon: "🥌",
        double_points: false,
    },
    EventSpec {
        id: "figure",
        name: "Pattinaggio di Figura",
        icon: "🩰",
        double_points: false,
    },
    EventSpec {
        id: "hockey",
        name: "Hockey su Ghiaccio",
        icon: "🏒",
        double_points: false,
    },
    EventSpec {
        id: "dream",
        name: "Dream Snowboard Cross",
        icon: "🏂",
        double_points: true,
    },
];

/// The fixed character catalog.
pub static CHARACTERS: [&str; 24] = [
    "Mario",
    "Luigi",
    "Peach",
    "Daisy",
    "Wario",
    "Waluigi",
    "Yoshi",
    "Birdo",
    "Bowser",
    "Bowser Jr.",
    "DK",
    "Diddy Kong",
    "Koopa",
    "Boo",
    "Sonic",
    "Tails",
    "Knuckles",
    "Amy",
    "Shadow",
    "Silver",
    "Blaze",
    "Vector",
    "Cream",
    "Dr. Eggman",
];

/// The fixed nation catalog.
pub static NATIONS: [&str; 15] = [
    "🇮🇹 Italia",
    "🇯🇵 Giappone",
    "🇺🇸 USA",
    "🇩🇪 Germania",
    "🇫🇷 Francia",
    "🇬🇧 UK",
    "🇨🇦 Canada",
    "🇦🇺 Australia",
    "🇧🇷 Brasile",
    "🇰🇷 Corea",
    "🇳🇴 Norvegia",
    "🇸🇪 Svezia",
    "🇨🇭 Svizzera",
    "🇦🇹 Austria",
    "🇳🇱 Olanda",
];

/// The fixed bonus-rule catalog.
pub static BONUS_RULES: [BonusSpec; 7] = [
    BonusSpec {
        id: "simpatia",
        name: "🎭 Premio Simpatia",
        points: 3,
        description: "Votato da tutti a fine serata. Chi ha fatto ridere di più?",
        awarded: AwardTiming::EndOfNight,
    },
    BonusSpec {
        id: "fedele",
        name: "🏳️ Fedele alla Nazione",
        points: 1,
        description: "Per evento: il tuo personaggio ha un legame tematico con la nazione scelta.",
        awarded: AwardTiming::PerEvent,
    },
    BonusSpec {
        id: "ironman",
        name: "💀 Iron Man",
        points: 2,
        description: "Rivelato a metà serata: non sei mai arrivato ultimo fino a quel momento.",
        awarded: AwardTiming::MidNightReveal,
    },
    BonusSpec {
        id: "specialist",
        name: "🎯 Specialista",
        points: 2,
        description: "Rivelato a metà serata: il punteggio più alto in un singolo evento.",
        awarded: AwardTiming::MidNightReveal,
    },
    BonusSpec {
        id: "ghiaccio",
        name: "🧊 Cuore di Ghiaccio",
        points: 1,
        description: "Rivelato a metà serata: non hai mai esultato/imprecato ad alta voce.",
        awarded: AwardTiming::MidNightReveal,
    },
    BonusSpec {
        id: "fairplay",
        name: "🤝 Fair Play",
        points: 1,
        description: "Assegnato dagli altri giocatori a chi ha perso con più stile.",
        awarded: AwardTiming::EndOfNight,
    },
    BonusSpec {
        id: "momento",
        name: "⚡ Momento Olimpico",
        points: 1,
        description: "Assegnabile dal MC in tempo reale: la giocata/reazione più memorabile.",
        awarded: AwardTiming::RealTime,
    },
];

/// Looks up an event by id.
#[must_use]
pub fn event(id: &EventId) -> Option<&'static EventSpec> {
    EVENTS.iter().find(|spec| spec.id == id.value())
}

/// Looks up a bonus rule by id.
#[must_use]
pub fn bonus_rule(id: &BonusId) -> Option<&'static BonusSpec> {
    BONUS_RULES.iter().find(|spec| spec.id == id.value())
}

/// Points scored by a placement, before any event multiplier.
///
/// Ranks 1 through 4 score 5, 3, 2, and 1 points; rank 5 and beyond score
/// nothing.
#[must_use]
pub const fn points_for_placement(placement: Placement) -> u32 {
    match placement.rank() {
        1 => 5,
        2 => 3,
        3 => 2,
        4 => 1,
        _ => 0,
    }
}

/// Point multiplier for an event.
///
/// Double-points events multiply placement points by two. An id missing
/// from the catalog gets the neutral multiplier.
#[must_use]
pub fn point_multiplier(id: &EventId) -> u32 {
    match event(id) {
        Some(spec) if spec.double_points => 2,
        _ => 1,
    }
}

/// All event ids in catalog order; the default selection for a fresh
/// tournament.
#[must_use]
pub fn default_selected_events() -> Vec<EventId> {
    EVENTS.iter().map(|spec| EventId::new(spec.id)).collect()
}

/// Checks if a character is part of the character catalog.
#[must_use]
pub fn is_known_character(character: &Character) -> bool {
    CHARACTERS.contains(&character.value())
}

/// Checks if a nation is part of the nation catalog.
#[must_use]
pub fn is_known_nation(nation: &Nation) -> bool {
    NATIONS.contains(&nation.value())
}
