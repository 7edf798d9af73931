//! Weapons that earn extra drinks when used by a marked attacker.
//!
//! Keys are the `weapon` short names the game reports in death events.

use phf::phf_map;

pub static SPECIAL_WEAPONS: phf::Map<&'static str, u32> = phf_map! {
    "amputator" => 2,
    "armageddon" => 6,
    "axtinguisher" => 2,
    "back_scratcher" => 2,
    "ball" => 6,
    "bat_wood" => 2,
    "bat" => 2,
    "battleaxe" => 2,
    "battleneedle" => 2,
    "bleed_kill" => 3,
    "bonesaw" => 2,
    "boston_basher" => 2,
    "bottle" => 2,
    "bushwacka" => 2,
    "candy_cane" => 2,
    "claidheamohmor" => 2,
    "club" => 2,
    "deflect_arrow" => 10,
    "deflect_rocket" => 4,
    "demokatana" => 2,
    "demoshield" => 3,
    "disciplinary_action" => 2,
    "eternal_reward" => 2,
    "eviction_notice" => 2,
    "fireaxe" => 2,
    "fists" => 2,
    "fryingpan" => 2,
    "gloves_running_urgently" => 2,
    "gloves" => 2,
    "headtaker" => 2,
    "holiday_punch" => 2,
    "holy_mackerel" => 4,
    "holymackerel" => 5,
    "hot_hand" => 5,
    "knife" => 2,
    "lava_axe" => 2,
    "lava_bat" => 2,
    "mailbox" => 2,
    "market_gardener" => 3,
    "nessieclub" => 5,
    "nonnonviolent_protest" => 3,
    "paintrain" => 2,
    "persian_persuader" => 2,
    "pickaxe" => 2,
    "powerjack" => 3,
    "robot_arm_combo_kill" => 2,
    "robot_arm_kill" => 2,
    "robot_arm" => 2,
    "sandman" => 2,
    "shahanshah" => 2,
    "sharp_dresser" => 2,
    "shovel" => 2,
    "sledgehammer" => 2,
    "solemn_vow" => 2,
    "southern_comfort_kill" => 2,
    "southern_hospitality" => 2,
    "splendid_screen" => 3,
    "spy_cicle" => 2,
    "steel_fists" => 2,
    "sword" => 2,
    "the_maul" => 2,
    "thirddegree" => 2,
    "tribalkukri" => 2,
    "ubersaw" => 2,
    "ullapool_caber_explosion" => 2,
    "ullapool_caber" => 3,
    "warfan" => 20,
    "warrior_spirit" => 2,
    "world" => 1,
    "wrap_assassin" => 10,
    "wrench_jag" => 2,
    "wrench" => 2,
    "annihilator" => 2,
    "tf_pumpkin_bomb" => 10,
    "telefrag" => 20,
    "mantreads" => 20,
    "atomizer" => 2,
};

/// Drinks for a kill with `weapon`, if it is a special weapon.
pub fn special_weapon_drinks(weapon: &str) -> Option<u32> {
    SPECIAL_WEAPONS.get(weapon).copied()
}
