//! Companion, set-card and partner identifiers.
//!
//! Canonical names are English. Every identifier also resolves from the
//! in-game Chinese name so records exported from the community sheet load
//! without a translation pass.

use std::fmt;

use serde::{Serialize, Serializer};

/// The five main characters. Companions and set cards belong to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partner {
    Xavier,
    Zayne,
    Rafayel,
    Sylus,
    Caleb,
}

impl Partner {
    pub const ALL: [Partner; 5] = [
        Partner::Xavier,
        Partner::Zayne,
        Partner::Rafayel,
        Partner::Sylus,
        Partner::Caleb,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Xavier => "Xavier",
            Self::Zayne => "Zayne",
            Self::Rafayel => "Rafayel",
            Self::Sylus => "Sylus",
            Self::Caleb => "Caleb",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            Self::Xavier => "沈星回",
            Self::Zayne => "黎深",
            Self::Rafayel => "祁煜",
            Self::Sylus => "秦彻",
            Self::Caleb => "夏以昼",
        }
    }

    /// Set cards of this partner that have no dedicated buff table but are
    /// still legal loadouts. They score as "No Set".
    pub fn untabled_set_cards(self) -> &'static [&'static str] {
        match self {
            Self::Xavier => &["鎏光", "睱日", "弦光", "心晴", "匿光"],
            Self::Zayne => &["终序", "夜色", "静谧", "心晴", "深林"],
            Self::Rafayel => &["坠浪", "点染", "斑斓", "心晴", "碧海"],
            Self::Sylus => &["纯白", "锋尖", "戮夜"],
            Self::Caleb => &["长昼", "离途"],
        }
    }
}

impl fmt::Display for Partner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompanionId {
    KingOfDarknight,
    Lumiere,
    LightSeeker,
    DistantYouth,
    EvolPolice,
    DeepspaceHunter,
    GodOfAnnihilation,
    MasterOfFate,
    Foreseer,
    MedicOfTheArctic,
    DawnBreaker,
    LinkonDoctor,
    LemurianSeaGod,
    GodOfTheTides,
    AbyssWalker,
    FreshPaint,
    PhantomOfTheSiren,
    Artist,
    SilverwingFiend,
    AbysmSovereign,
    RelentlessConqueror,
    OtherworldlyVisitor,
    UltimateWeaponX02,
    FarspaceColonel,
    DeepspacePilot,
    /// Fallback for identifiers the ruleset does not know.
    Default,
}

impl CompanionId {
    pub const ALL: [CompanionId; 25] = [
        CompanionId::KingOfDarknight,
        CompanionId::Lumiere,
        CompanionId::LightSeeker,
        CompanionId::DistantYouth,
        CompanionId::EvolPolice,
        CompanionId::DeepspaceHunter,
        CompanionId::GodOfAnnihilation,
        CompanionId::MasterOfFate,
        CompanionId::Foreseer,
        CompanionId::MedicOfTheArctic,
        CompanionId::DawnBreaker,
        CompanionId::LinkonDoctor,
        CompanionId::LemurianSeaGod,
        CompanionId::GodOfTheTides,
        CompanionId::AbyssWalker,
        CompanionId::FreshPaint,
        CompanionId::PhantomOfTheSiren,
        CompanionId::Artist,
        CompanionId::SilverwingFiend,
        CompanionId::AbysmSovereign,
        CompanionId::RelentlessConqueror,
        CompanionId::OtherworldlyVisitor,
        CompanionId::UltimateWeaponX02,
        CompanionId::FarspaceColonel,
        CompanionId::DeepspacePilot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::KingOfDarknight => "King of Darknight",
            Self::Lumiere => "Lumiere",
            Self::LightSeeker => "Light Seeker",
            Self::DistantYouth => "Distant Youth",
            Self::EvolPolice => "Evol Police",
            Self::DeepspaceHunter => "Deepspace Hunter",
            Self::GodOfAnnihilation => "God of Annihilation",
            Self::MasterOfFate => "Master of Fate",
            Self::Foreseer => "Foreseer",
            Self::MedicOfTheArctic => "Medic of the Arctic",
            Self::DawnBreaker => "Dawn Breaker",
            Self::LinkonDoctor => "Linkon Doctor",
            Self::LemurianSeaGod => "Lemurian Sea God",
            Self::GodOfTheTides => "God of the Tides",
            Self::AbyssWalker => "Abyss Walker",
            Self::FreshPaint => "Fresh Paint",
            Self::PhantomOfTheSiren => "Phantom of the Siren",
            Self::Artist => "Artist",
            Self::SilverwingFiend => "Silverwing Fiend",
            Self::AbysmSovereign => "Abysm Sovereign",
            Self::RelentlessConqueror => "Relentless Conqueror",
            Self::OtherworldlyVisitor => "Otherworldly Visitor",
            Self::UltimateWeaponX02 => "Ultimate Weapon X-02",
            Self::FarspaceColonel => "Farspace Colonel",
            Self::DeepspacePilot => "Deepspace Pilot",
            Self::Default => "Default",
        }
    }

    /// In-game names accepted on input. The first entry is the display alias.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::KingOfDarknight => &["暗蚀国王"],
            Self::Lumiere => &["光猎"],
            Self::LightSeeker => &["逐光骑士"],
            Self::DistantYouth => &["遥远少年"],
            Self::EvolPolice => &["Evol特警"],
            Self::DeepspaceHunter => &["深空猎人"],
            Self::GodOfAnnihilation => &["终末之神"],
            Self::MasterOfFate => &["九黎司命"],
            Self::Foreseer => &["永恒先知"],
            Self::MedicOfTheArctic => &["极地军医"],
            Self::DawnBreaker => &["黎明抹杀者"],
            Self::LinkonDoctor => &["临空医生"],
            Self::LemurianSeaGod => &["利莫里亚海神"],
            Self::GodOfTheTides => &["潮汐之神"],
            Self::AbyssWalker => &["深海潜行者"],
            Self::FreshPaint => &["画坛新锐", "花坛新锐"],
            Self::PhantomOfTheSiren => &["海妖魅影"],
            Self::Artist => &["艺术家"],
            Self::SilverwingFiend => &["银翼恶魔"],
            Self::AbysmSovereign => &["深渊主宰"],
            Self::RelentlessConqueror => &["无尽掠夺者"],
            Self::OtherworldlyVisitor => &["异界来客"],
            Self::UltimateWeaponX02 => &["终极兵器X-02"],
            Self::FarspaceColonel => &["远空执舰官"],
            Self::DeepspacePilot => &["深空飞行员"],
            Self::Default => &[],
        }
    }

    pub fn partner(self) -> Option<Partner> {
        use CompanionId::*;
        match self {
            KingOfDarknight | Lumiere | LightSeeker | DistantYouth | EvolPolice
            | DeepspaceHunter => Some(Partner::Xavier),
            GodOfAnnihilation | MasterOfFate | Foreseer | MedicOfTheArctic | DawnBreaker
            | LinkonDoctor => Some(Partner::Zayne),
            LemurianSeaGod | GodOfTheTides | AbyssWalker | FreshPaint | PhantomOfTheSiren
            | Artist => Some(Partner::Rafayel),
            SilverwingFiend | AbysmSovereign | RelentlessConqueror | OtherworldlyVisitor => {
                Some(Partner::Sylus)
            }
            UltimateWeaponX02 | FarspaceColonel | DeepspacePilot => Some(Partner::Caleb),
            Default => None,
        }
    }

    /// Companions whose kit scales with defense and must report a defense stat.
    pub fn scales_with_defense(self) -> bool {
        matches!(
            self,
            Self::Lumiere
                | Self::Foreseer
                | Self::FarspaceColonel
                | Self::LemurianSeaGod
                | Self::SilverwingFiend
        )
    }

    /// Companions whose kit scales with hp and must report an hp stat.
    pub fn scales_with_hp(self) -> bool {
        matches!(
            self,
            Self::GodOfTheTides
                | Self::AbysmSovereign
                | Self::KingOfDarknight
                | Self::GodOfAnnihilation
        )
    }

    pub fn resolve(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|id| {
            id.name().eq_ignore_ascii_case(input) || id.aliases().contains(&input)
        })
    }
}

impl fmt::Display for CompanionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for CompanionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetCardId {
    NightVow,
    Midnight,
    LightSeeking,
    Diviner,
    Snowfall,
    Forever,
    Mistsea,
    Temple,
    DeepSea,
    CrimsonRapture,
    Abyssal,
    Captivating,
    LoneRoad,
    Farspace,
    FourStar,
    NoSet,
}

impl SetCardId {
    pub const ALL: [SetCardId; 16] = [
        SetCardId::NightVow,
        SetCardId::Midnight,
        SetCardId::LightSeeking,
        SetCardId::Diviner,
        SetCardId::Snowfall,
        SetCardId::Forever,
        SetCardId::Mistsea,
        SetCardId::Temple,
        SetCardId::DeepSea,
        SetCardId::CrimsonRapture,
        SetCardId::Abyssal,
        SetCardId::Captivating,
        SetCardId::LoneRoad,
        SetCardId::Farspace,
        SetCardId::FourStar,
        SetCardId::NoSet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NightVow => "Night Vow",
            Self::Midnight => "Midnight",
            Self::LightSeeking => "Light Seeking",
            Self::Diviner => "Diviner",
            Self::Snowfall => "Snowfall",
            Self::Forever => "Forever",
            Self::Mistsea => "Mistsea",
            Self::Temple => "Temple",
            Self::DeepSea => "Deep Sea",
            Self::CrimsonRapture => "Crimson Rapture",
            Self::Abyssal => "Abyssal",
            Self::Captivating => "Captivating",
            Self::LoneRoad => "Lone Road",
            Self::Farspace => "Farspace",
            Self::FourStar => "Four Star",
            Self::NoSet => "No Set",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            Self::NightVow => "夜誓",
            Self::Midnight => "末夜",
            Self::LightSeeking => "逐光",
            Self::Diviner => "神谕",
            Self::Snowfall => "拥雪",
            Self::Forever => "永恒",
            Self::Mistsea => "雾海",
            Self::Temple => "神殿",
            Self::DeepSea => "深海",
            Self::CrimsonRapture => "猩红",
            Self::Abyssal => "深渊",
            Self::Captivating => "掠心",
            Self::LoneRoad => "寂路",
            Self::Farspace => "远空",
            Self::FourStar => "四星",
            Self::NoSet => "无套装",
        }
    }

    /// Owning partner. Four Star and No Set are shared by everyone.
    pub fn partner(self) -> Option<Partner> {
        use SetCardId::*;
        match self {
            NightVow | Midnight | LightSeeking => Some(Partner::Xavier),
            Diviner | Snowfall | Forever => Some(Partner::Zayne),
            Mistsea | Temple | DeepSea => Some(Partner::Rafayel),
            CrimsonRapture | Abyssal | Captivating => Some(Partner::Sylus),
            LoneRoad | Farspace => Some(Partner::Caleb),
            FourStar | NoSet => None,
        }
    }

    pub fn resolve(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(input) || id.alias() == input)
    }
}

impl fmt::Display for SetCardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SetCardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
