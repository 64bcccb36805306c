const TRANSITION_NAME_BOTH: &str = "both";
const TRANSITION_NAME_LEADING: &str = "leading";
const TRANSITION_NAME_TRAILING: &str = "trailing";

const TRANSITION_ID_BOTH: u8 = 0;
const TRANSITION_ID_LEADING: u8 = 1;
const TRANSITION_ID_TRAILING: u8 = 2;

/// Which edges of a color block cross-fade into the neighbouring step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TransitionType {
    #[default]
    Both = TRANSITION_ID_BOTH,
    Leading = TRANSITION_ID_LEADING,
    Trailing = TRANSITION_ID_TRAILING,
}

/// Blend decision for one position inside a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blend {
    /// Block color only
    Pure,
    /// Mix in the previous step by the given amount (0.0-1.0)
    Previous(f32),
    /// Mix in the next step by the given amount (0.0-1.0)
    Next(f32),
}

impl TransitionType {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            TRANSITION_ID_BOTH => Self::Both,
            TRANSITION_ID_LEADING => Self::Leading,
            TRANSITION_ID_TRAILING => Self::Trailing,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Both => TRANSITION_NAME_BOTH,
            Self::Leading => TRANSITION_NAME_LEADING,
            Self::Trailing => TRANSITION_NAME_TRAILING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        [Self::Both, Self::Leading, Self::Trailing]
            .into_iter()
            .find(|transition| transition.as_str().eq_ignore_ascii_case(s))
    }

    /// Shape the cross-fade at block fraction `t` (0.0 = block start)
    ///
    /// `width` is the share of the block spent fading. Zero gives hard
    /// steps, one fades across the whole block. The shapes are continuous
    /// across block boundaries: `Both` meets its neighbour at 50/50,
    /// `Leading` starts from the pure previous color and `Trailing` ends on
    /// the pure next color.
    pub fn shape(self, width: f32, t: f32) -> Blend {
        if width.is_nan() || width <= 0.0 {
            return Blend::Pure;
        }
        let width = width.min(1.0);
        match self {
            Self::Leading => {
                if t < width {
                    Blend::Previous(1.0 - t / width)
                } else {
                    Blend::Pure
                }
            }
            Self::Trailing => {
                let start = 1.0 - width;
                if t > start {
                    Blend::Next((t - start) / width)
                } else {
                    Blend::Pure
                }
            }
            Self::Both => {
                let half = width / 2.0;
                if t < half {
                    Blend::Previous(0.5 * (1.0 - t / half))
                } else if t > 1.0 - half {
                    Blend::Next(0.5 * (t - (1.0 - half)) / half)
                } else {
                    Blend::Pure
                }
            }
        }
    }
}
