use std::ops::BitOr;

/// What a field shift did, as a set of flags. Never an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status(pub u8);
pub const STATUS_NONE: u8 = 0;
pub const STATUS_CLAMPED: u8 = 1 << 0;
pub const STATUS_TRUNCATED: u8 = 1 << 1;
pub const STATUS_INFINITE: u8 = 1 << 2;
pub const STATUS_NAN: u8 = 1 << 3;

impl Status {
    pub fn none() -> Status { Status(STATUS_NONE) }
    pub fn clamped() -> Status { Status(STATUS_CLAMPED) }
    pub fn truncated() -> Status { Status(STATUS_TRUNCATED) }
    pub fn infinite() -> Status { Status(STATUS_INFINITE) }
    pub fn nan() -> Status { Status(STATUS_NAN) }

    pub fn contains(self, flags: u8) -> bool {
        self.0 & flags == flags
    }

    pub fn is_none(self) -> bool {
        self.0 == STATUS_NONE
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, other: Status) -> Status {
        Status(self.0 | other.0)
    }
}
