use super::RandomLayout;

const DIRECTION_NAME_LEFT_RIGHT: &str = "left_right";
const DIRECTION_NAME_RIGHT_LEFT: &str = "right_left";
const DIRECTION_NAME_MID_TO_END: &str = "mid_to_end";
const DIRECTION_NAME_END_TO_MID: &str = "end_to_mid";
const DIRECTION_NAME_RANDOM: &str = "random";

const DIRECTION_ID_LEFT_RIGHT: u8 = 0;
const DIRECTION_ID_RIGHT_LEFT: u8 = 1;
const DIRECTION_ID_MID_TO_END: u8 = 2;
const DIRECTION_ID_END_TO_MID: u8 = 3;
const DIRECTION_ID_RANDOM: u8 = 4;

/// How positions inside a segment are laid out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    #[default]
    LeftRight = DIRECTION_ID_LEFT_RIGHT,
    RightLeft = DIRECTION_ID_RIGHT_LEFT,
    /// Segment center is the origin, both halves run outwards
    MidToEnd = DIRECTION_ID_MID_TO_END,
    /// Segment ends are the origin, both halves run inwards
    EndToMid = DIRECTION_ID_END_TO_MID,
    /// Segment bins are shuffled once per show
    Random = DIRECTION_ID_RANDOM,
}

impl Direction {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            DIRECTION_ID_LEFT_RIGHT => Self::LeftRight,
            DIRECTION_ID_RIGHT_LEFT => Self::RightLeft,
            DIRECTION_ID_MID_TO_END => Self::MidToEnd,
            DIRECTION_ID_END_TO_MID => Self::EndToMid,
            DIRECTION_ID_RANDOM => Self::Random,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftRight => DIRECTION_NAME_LEFT_RIGHT,
            Self::RightLeft => DIRECTION_NAME_RIGHT_LEFT,
            Self::MidToEnd => DIRECTION_NAME_MID_TO_END,
            Self::EndToMid => DIRECTION_NAME_END_TO_MID,
            Self::Random => DIRECTION_NAME_RANDOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        [
            Self::LeftRight,
            Self::RightLeft,
            Self::MidToEnd,
            Self::EndToMid,
            Self::Random,
        ]
        .into_iter()
        .find(|direction| direction.as_str().eq_ignore_ascii_case(s))
    }

    /// Remap an offset inside a segment to a distance from the origin
    ///
    /// `offset` and the result are in pixel units, `offset` in
    /// `[0, segment_len)`. `MidToEnd` and `EndToMid` fold the segment so the
    /// result stays within half of it. `Random` without a resolved layout
    /// (before the first advance of a show) behaves like `LeftRight`.
    pub fn remap(self, offset: f32, segment_len: f32, layout: Option<&RandomLayout>) -> f32 {
        if segment_len <= 0.0 {
            return 0.0;
        }
        let offset = offset.clamp(0.0, segment_len);
        let half = segment_len / 2.0;
        match self {
            Self::LeftRight => offset,
            Self::RightLeft => {
                if offset > 0.0 {
                    segment_len - offset
                } else {
                    0.0
                }
            }
            Self::MidToEnd => libm::fabsf(offset - half),
            Self::EndToMid => half - libm::fabsf(offset - half),
            Self::Random => layout.map_or(offset, |layout| {
                layout.remap(offset / segment_len) * segment_len
            }),
        }
    }
}
