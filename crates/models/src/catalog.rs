use serde::{Deserialize, Serialize};
use std::fmt;

/// The 14 Malaysia Super League clubs the classifier was trained on.
///
/// The discriminants are the integer codes the model expects; the catalog is
/// closed, so an unknown club name has no code and must be rejected upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    #[serde(rename = "Johor Darul Ta'zim")]
    JohorDarulTazim = 0,
    #[serde(rename = "Kedah Darul Aman")]
    KedahDarulAman = 1,
    #[serde(rename = "Kelantan")]
    Kelantan = 2,
    #[serde(rename = "Kelantan United")]
    KelantanUnited = 3,
    #[serde(rename = "Kuala Lumpur City")]
    KualaLumpurCity = 4,
    #[serde(rename = "Kuching City")]
    KuchingCity = 5,
    #[serde(rename = "Negeri Sembilan")]
    NegeriSembilan = 6,
    #[serde(rename = "PDRM")]
    Pdrm = 7,
    #[serde(rename = "Penang")]
    Penang = 8,
    #[serde(rename = "Perak")]
    Perak = 9,
    #[serde(rename = "Sabah")]
    Sabah = 10,
    #[serde(rename = "Selangor")]
    Selangor = 11,
    #[serde(rename = "Sri Pahang")]
    SriPahang = 12,
    #[serde(rename = "Terengganu")]
    Terengganu = 13,
}

impl Team {
    pub const ALL: [Team; 14] = [
        Team::JohorDarulTazim,
        Team::KedahDarulAman,
        Team::Kelantan,
        Team::KelantanUnited,
        Team::KualaLumpurCity,
        Team::KuchingCity,
        Team::NegeriSembilan,
        Team::Pdrm,
        Team::Penang,
        Team::Perak,
        Team::Sabah,
        Team::Selangor,
        Team::SriPahang,
        Team::Terengganu,
    ];

    /// Integer code used in the feature vector.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Team::JohorDarulTazim => "Johor Darul Ta'zim",
            Team::KedahDarulAman => "Kedah Darul Aman",
            Team::Kelantan => "Kelantan",
            Team::KelantanUnited => "Kelantan United",
            Team::KualaLumpurCity => "Kuala Lumpur City",
            Team::KuchingCity => "Kuching City",
            Team::NegeriSembilan => "Negeri Sembilan",
            Team::Pdrm => "PDRM",
            Team::Penang => "Penang",
            Team::Perak => "Perak",
            Team::Sabah => "Sabah",
            Team::Selangor => "Selangor",
            Team::SriPahang => "Sri Pahang",
            Team::Terengganu => "Terengganu",
        }
    }

    pub fn from_name(name: &str) -> Option<Team> {
        Team::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the first-selected team plays at its own ground.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Venue {
    Away,
    Home,
}

impl Venue {
    pub const ALL: [Venue; 2] = [Venue::Home, Venue::Away];

    pub fn code(&self) -> u8 {
        match self {
            Venue::Home => 1,
            Venue::Away => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }

    pub fn from_name(name: &str) -> Option<Venue> {
        Venue::ALL.iter().copied().find(|v| v.name() == name)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kickoff slots offered by the fixture list, encoded as 24-hour values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum KickoffHour {
    #[serde(rename = "5pm")]
    FivePm,
    #[serde(rename = "6pm")]
    SixPm,
    #[serde(rename = "7pm")]
    SevenPm,
    #[serde(rename = "8pm")]
    EightPm,
    #[serde(rename = "9pm")]
    NinePm,
    #[serde(rename = "10pm")]
    TenPm,
    #[serde(rename = "11pm")]
    ElevenPm,
    #[serde(rename = "12am")]
    Midnight,
}

impl KickoffHour {
    pub const ALL: [KickoffHour; 8] = [
        KickoffHour::FivePm,
        KickoffHour::SixPm,
        KickoffHour::SevenPm,
        KickoffHour::EightPm,
        KickoffHour::NinePm,
        KickoffHour::TenPm,
        KickoffHour::ElevenPm,
        KickoffHour::Midnight,
    ];

    pub fn hour(&self) -> u8 {
        match self {
            KickoffHour::FivePm => 17,
            KickoffHour::SixPm => 18,
            KickoffHour::SevenPm => 19,
            KickoffHour::EightPm => 20,
            KickoffHour::NinePm => 21,
            KickoffHour::TenPm => 22,
            KickoffHour::ElevenPm => 23,
            KickoffHour::Midnight => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KickoffHour::FivePm => "5pm",
            KickoffHour::SixPm => "6pm",
            KickoffHour::SevenPm => "7pm",
            KickoffHour::EightPm => "8pm",
            KickoffHour::NinePm => "9pm",
            KickoffHour::TenPm => "10pm",
            KickoffHour::ElevenPm => "11pm",
            KickoffHour::Midnight => "12am",
        }
    }

    pub fn from_label(label: &str) -> Option<KickoffHour> {
        KickoffHour::ALL.iter().copied().find(|k| k.label() == label)
    }
}

impl fmt::Display for KickoffHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of week, encoded 1..=7 starting at Monday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl MatchDay {
    pub const ALL: [MatchDay; 7] = [
        MatchDay::Monday,
        MatchDay::Tuesday,
        MatchDay::Wednesday,
        MatchDay::Thursday,
        MatchDay::Friday,
        MatchDay::Saturday,
        MatchDay::Sunday,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchDay::Monday => "Monday",
            MatchDay::Tuesday => "Tuesday",
            MatchDay::Wednesday => "Wednesday",
            MatchDay::Thursday => "Thursday",
            MatchDay::Friday => "Friday",
            MatchDay::Saturday => "Saturday",
            MatchDay::Sunday => "Sunday",
        }
    }

    pub fn from_name(name: &str) -> Option<MatchDay> {
        MatchDay::ALL.iter().copied().find(|d| d.name() == name)
    }
}

impl fmt::Display for MatchDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
