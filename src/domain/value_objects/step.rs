//! Booking flow steps

use std::fmt;

/// The named steps of the booking wizard
///
/// The flow is linear: `SalonSelect` through `Confirmation` advance one step
/// per selection; `Success` loops back to `SalonSelect` via an explicit
/// reset. There is no terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Login,
    Signup,
    SalonSelect,
    ServiceSelect,
    StaffSelect,
    ScheduleSelect,
    Confirmation,
    Success,
}

impl Step {
    /// Whether back navigation is available from this step
    pub fn can_go_back(self) -> bool {
        matches!(
            self,
            Step::ServiceSelect | Step::StaffSelect | Step::ScheduleSelect | Step::Confirmation
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::Login => "Login",
            Step::Signup => "Sign up",
            Step::SalonSelect => "Choose a salon",
            Step::ServiceSelect => "Choose services",
            Step::StaffSelect => "Choose a stylist",
            Step::ScheduleSelect => "Choose a time",
            Step::Confirmation => "Confirm booking",
            Step::Success => "Booked",
        };
        write!(f, "{}", label)
    }
}
