use log::warn;

/// An 8-bit per channel color
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// # Color profile
/// The pair of colors lit and unlit pixels are painted with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorProfile {
    pub foreground: Rgb,
    pub background: Rgb,
}

/// Every recognised profile, by name. The first entry is the default.
pub const PROFILES: [(&str, ColorProfile); 5] = [
    (
        "black-white",
        ColorProfile {
            foreground: Rgb(255, 255, 255),
            background: Rgb(0, 0, 0),
        },
    ),
    (
        "night-sky",
        ColorProfile {
            foreground: Rgb(255, 255, 204),
            background: Rgb(0, 0, 68),
        },
    ),
    (
        "console",
        ColorProfile {
            foreground: Rgb(0, 0, 0),
            background: Rgb(34, 238, 34),
        },
    ),
    (
        "honey",
        ColorProfile {
            foreground: Rgb(153, 102, 0),
            background: Rgb(255, 204, 0),
        },
    ),
    (
        "paper",
        ColorProfile {
            foreground: Rgb(34, 34, 34),
            background: Rgb(255, 250, 240),
        },
    ),
];

impl ColorProfile {
    /// Looks up a profile by name.
    pub fn named(name: &str) -> Option<Self> {
        PROFILES
            .iter()
            .find(|(profile_name, _)| *profile_name == name)
            .map(|(_, profile)| *profile)
    }

    /// Looks up a profile by name, falling back to black-white for unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::named(name).unwrap_or_else(|| {
            warn!(
                "no such color profile: {}; falling back to {}",
                name, PROFILES[0].0
            );
            Self::default()
        })
    }
}

impl Default for ColorProfile {
    fn default() -> Self {
        PROFILES[0].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_profile() {
        let honey = ColorProfile::from_name("honey");
        assert_eq!(honey.foreground, Rgb(153, 102, 0));
        assert_eq!(honey.background, Rgb(255, 204, 0));
    }

    #[test]
    fn test_unknown_profile_falls_back_to_black_white() {
        assert_eq!(ColorProfile::named("mauve"), None);
        assert_eq!(ColorProfile::from_name("mauve"), ColorProfile::default());
        assert_eq!(ColorProfile::default().foreground, Rgb(255, 255, 255));
    }
}
