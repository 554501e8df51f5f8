use strum::IntoStaticStr;

/// Primary button lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[repr(u8)]
pub enum BtLane {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl BtLane {
    pub const ALL: [BtLane; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Secondary button lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[repr(u8)]
pub enum FxLane {
    #[strum(serialize = "L")]
    Left = 0,
    #[strum(serialize = "R")]
    Right = 1,
}

impl FxLane {
    pub const ALL: [FxLane; 2] = [Self::Left, Self::Right];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Side-option key holding the audio effect of a hold starting at a pulse.
    pub fn effect_key(&self) -> &'static str {
        match self {
            Self::Left => "fx-l",
            Self::Right => "fx-r",
        }
    }

    /// Side-option key holding the key sound of a chip at a pulse.
    pub fn key_sound_key(&self) -> &'static str {
        match self {
            Self::Left => "fx-l_se",
            Self::Right => "fx-r_se",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[repr(u8)]
pub enum LaserLane {
    #[strum(serialize = "L")]
    Left = 0,
    #[strum(serialize = "R")]
    Right = 1,
}

impl LaserLane {
    pub const ALL: [LaserLane; 2] = [Self::Left, Self::Right];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Side-option key holding the wide-laser marker.
    pub fn wide_key(&self) -> &'static str {
        match self {
            Self::Left => "laserrange_l",
            Self::Right => "laserrange_r",
        }
    }
}
