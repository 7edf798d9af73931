//! Drink scoring rules.
//!
//! Each rule looks at a single [`DeathEvent`] in isolation and either
//! contributes a number of drinks or stays silent. Contributions stack: a
//! marked killer using a special weapon triggers both the killer rule and the
//! weapon rule on the same death.

mod canonical;
mod weapons;


use regex::Regex;
use std::sync::LazyLock;

use crate::events::DeathEvent;

pub use canonical::{
    AssisterDominationRule, AssisterDrinkingRule, AttackerDominationRule, KillerDrinkingRule,
    SpecialWeaponRule, SynergyRule, TauntKillRule, VehicleKillRule,
};
pub use weapons::{SPECIAL_WEAPONS, special_weapon_drinks};

static MARKED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\[\{][SD]C?G[\]\}]").unwrap());

/// Display name carries a drinking tag (`[DG]`, `{sg}`, `[SCG]`, ...).
pub fn is_marked_name(name: &str) -> bool {
    MARKED_NAME_RE.is_match(name)
}

/// A single scoring rule.
///
/// `drinks` returns `None` when the rule does not apply, so a value is never
/// produced for an event the rule has not accepted.
pub trait DrinkRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Justification shown to the victim.
    fn message(&self) -> &'static str;

    fn drinks(&self, event: &DeathEvent) -> Option<u32>;

    fn applies(&self, event: &DeathEvent) -> bool {
        self.drinks(event).is_some()
    }
}

/// One rule's share of a death's total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub rule: &'static str,
    pub drinks: u32,
    pub message: &'static str,
}

impl Contribution {
    pub fn line(&self) -> String {
        format!("[+{}] {}", self.drinks, self.message)
    }
}

/// Outcome of running every rule against one death.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    /// Eligible contributions, in rule registration order.
    pub contributions: Vec<Contribution>,
    pub total: u32,
}

impl Score {
    /// One `[+n] reason` line per contribution followed by `Total: n`.
    pub fn messages(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.contributions.iter().map(Contribution::line).collect();
        lines.push(format!("Total: {}", self.total));
        lines
    }
}

/// Ordered list of registered rules.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn DrinkRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard rule list, in the order messages are shown.
    pub fn canonical() -> Self {
        let mut rules = Self::new();
        rules.add(KillerDrinkingRule);
        rules.add(AssisterDrinkingRule);
        rules.add(SynergyRule);
        rules.add(TauntKillRule);
        rules.add(VehicleKillRule);
        rules.add(AttackerDominationRule);
        rules.add(AssisterDominationRule);
        rules.add(SpecialWeaponRule);
        rules
    }

    pub fn add(&mut self, rule: impl DrinkRule + 'static) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Evaluate every rule against `event`.
    pub fn score(&self, event: &DeathEvent) -> Score {
        let contributions: Vec<Contribution> = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.drinks(event).map(|drinks| Contribution {
                    rule: rule.name(),
                    drinks,
                    message: rule.message(),
                })
            })
            .collect();
        let total = contributions.iter().map(|c| c.drinks).sum();

        Score {
            contributions,
            total,
        }
    }
}
