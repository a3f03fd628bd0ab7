//! Vaccination hubs and staffing-derived capacity.

use vx_core::HubId;

/// Vaccinations per hour one doctor can supervise.
pub const PER_DOCTOR: u32 = 10;
/// Vaccinations per hour one nurse can administer.
pub const PER_NURSE: u32 = 12;
/// Vaccinations per hour one other staff member can process.
pub const PER_OTHER: u32 = 20;

/// Staff counts of a hub.  Each count is at least 1 once set through
/// `Registry::set_staff`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Staffing {
    pub doctors: u32,
    pub nurses:  u32,
    pub other:   u32,
}

impl Staffing {
    /// `min(10 × doctors, 12 × nurses, 20 × other)`.
    pub fn hourly_capacity(&self) -> u32 {
        (PER_DOCTOR.saturating_mul(self.doctors))
            .min(PER_NURSE.saturating_mul(self.nurses))
            .min(PER_OTHER.saturating_mul(self.other))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hub {
    name:     HubId,
    staffing: Option<Staffing>,
}

impl Hub {
    pub fn new(name: HubId) -> Self {
        Self { name, staffing: None }
    }

    pub fn name(&self) -> &HubId {
        &self.name
    }

    pub fn staffing(&self) -> Option<Staffing> {
        self.staffing
    }

    /// Raw hourly capacity; 0 while the hub has no staff.
    pub fn hourly_capacity(&self) -> u32 {
        self.staffing.map_or(0, |s| s.hourly_capacity())
    }

    pub(crate) fn set_staffing(&mut self, staffing: Staffing) {
        self.staffing = Some(staffing);
    }
}
