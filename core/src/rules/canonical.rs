//! The standard drinking rules.
//!
//! - +1 if your killer is drinking
//! - +1 if the assister is drinking (unless it's a suicide)
//! - +1 if both attacker and assister are drinking
//! - +6 for a taunt kill
//! - +6 if it's a vehicle
//! - +2 if the killer dominates/revenges you
//! - +2 if the assister dominates/revenges you
//! - +n for a special weapon

use super::DrinkRule;
use super::weapons::special_weapon_drinks;
use crate::events::DeathEvent;
use crate::tf_ids::{damage_bits, death_flags, has_any};

#[inline]
fn when(cond: bool, drinks: u32) -> Option<u32> {
    cond.then_some(drinks)
}

pub struct KillerDrinkingRule;

impl DrinkRule for KillerDrinkingRule {
    fn name(&self) -> &'static str {
        "killer_drinking"
    }

    fn message(&self) -> &'static str {
        "You were killed by [DG]"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        when(event.attacker.is_marked() && event.is_not_suicide(), 1)
    }
}

pub struct AssisterDrinkingRule;

impl DrinkRule for AssisterDrinkingRule {
    fn name(&self) -> &'static str {
        "assister_drinking"
    }

    fn message(&self) -> &'static str {
        "You were kill assisted by [DG]"
    }

    // Guard compares attacker and victim, not assister.
    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        when(event.assister.is_marked() && event.is_not_suicide(), 1)
    }
}

pub struct SynergyRule;

impl DrinkRule for SynergyRule {
    fn name(&self) -> &'static str {
        "synergy"
    }

    fn message(&self) -> &'static str {
        "Drinker synergy bonus"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        when(
            event.attacker.is_marked() && event.assister.is_marked() && event.is_not_suicide(),
            1,
        )
    }
}

pub struct TauntKillRule;

impl DrinkRule for TauntKillRule {
    fn name(&self) -> &'static str {
        "taunt_kill"
    }

    fn message(&self) -> &'static str {
        "Killed by a taunt kill"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        let taunt = event.weapon().is_some_and(|w| w.contains("taunt"));
        when(event.attacker.is_marked() && taunt, 6)
    }
}

/// Applies whoever the attacker is; trains and other vehicles have no name tag.
pub struct VehicleKillRule;

impl DrinkRule for VehicleKillRule {
    fn name(&self) -> &'static str {
        "vehicle_kill"
    }

    fn message(&self) -> &'static str {
        "You got run over by a train"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        when(has_any(event.damage_bits, damage_bits::VEHICLE), 6)
    }
}

pub struct AttackerDominationRule;

impl DrinkRule for AttackerDominationRule {
    fn name(&self) -> &'static str {
        "attacker_domination"
    }

    fn message(&self) -> &'static str {
        "Attacker dominated/revenged you"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        let flags = death_flags::KILLER_DOMINATION | death_flags::KILLER_REVENGE;
        when(event.attacker.is_marked() && has_any(event.death_flags, flags), 2)
    }
}

pub struct AssisterDominationRule;

impl DrinkRule for AssisterDominationRule {
    fn name(&self) -> &'static str {
        "assister_domination"
    }

    fn message(&self) -> &'static str {
        "Assister dominated/revenged you"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        let flags = death_flags::ASSISTER_DOMINATION | death_flags::ASSISTER_REVENGE;
        when(event.assister.is_marked() && has_any(event.death_flags, flags), 2)
    }
}

pub struct SpecialWeaponRule;

impl DrinkRule for SpecialWeaponRule {
    fn name(&self) -> &'static str {
        "special_weapon"
    }

    fn message(&self) -> &'static str {
        "Killed by a special weapon"
    }

    fn drinks(&self, event: &DeathEvent) -> Option<u32> {
        if !event.attacker.is_marked() {
            return None;
        }
        special_weapon_drinks(event.weapon()?)
    }
}
