//! Booking flow state machine
//!
//! The wizard is modeled as a pure reducer: `reduce(state, event)` returns
//! the next state plus a list of commands (effect descriptions) for the
//! caller to execute. The reducer itself never touches the store, which
//! keeps every transition testable without a live backend.
//!
//! Completion events (`LoginSucceeded`, `SalonsLoaded`, ...) are fed back by
//! whoever executed the commands.

use crate::domain::entities::{Booking, Profile, Salon, Schedule, Service, Staff};
use crate::domain::value_objects::Step;

/// Notice shown when continuing from service selection with nothing picked
pub const NOTICE_SELECT_A_SERVICE: &str = "Please select at least one service";

/// Notice shown when the signup passwords disagree
pub const NOTICE_PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// The full controller state: current step, auth, fetched lists, selections
///
/// Derived values (total price) are recomputed on every read, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    pub step: Step,
    pub user: Option<Profile>,

    // Fetched lists for the current step
    pub salons: Vec<Salon>,
    pub services: Vec<Service>,
    pub staff: Vec<Staff>,
    pub schedules: Vec<Schedule>,

    // Selections accumulated on forward transitions
    pub selected_salon: Option<Salon>,
    pub selected_services: Vec<Service>,
    pub selected_staff: Option<Staff>,
    pub selected_schedule: Option<Schedule>,

    /// Bookings created during this session
    pub bookings: Vec<Booking>,

    /// Email prefilled into the login form after a successful signup
    pub login_email: String,

    /// Transient user-facing message (validation error, alert, info)
    pub notice: Option<String>,
}

impl FlowState {
    /// Sum of selected service prices, recomputed on every call
    pub fn total_price(&self) -> f64 {
        self.selected_services.iter().map(|s| s.price).sum()
    }

    /// Whether a service id is currently in the selection set
    pub fn is_service_selected(&self, id: &str) -> bool {
        self.selected_services.iter().any(|s| s.id == id)
    }

    fn clear_selections(&mut self) {
        self.services.clear();
        self.staff.clear();
        self.schedules.clear();
        self.selected_salon = None;
        self.selected_services.clear();
        self.selected_staff = None;
        self.selected_schedule = None;
        self.notice = None;
    }
}

/// User actions and completion events driving the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    // Auth
    SubmitLogin { email: String, password: String },
    LoginSucceeded(Profile),
    LoginFailed(String),
    GoToSignup,
    GoToLogin,
    SubmitSignup {
        name: String,
        phone: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    SignupSucceeded { email: String },
    SignupFailed(String),

    // Forward selections
    PickSalon(Salon),
    ToggleService(Service),
    Continue,
    PickStaff(Staff),
    PickSlot(Schedule),
    Confirm,

    // Fetched data
    SalonsLoaded(Vec<Salon>),
    ServicesLoaded(Vec<Service>),
    StaffLoaded(Vec<Staff>),
    SchedulesLoaded(Vec<Schedule>),
    BookingCreated(Booking),
    BookingFailed(String),

    // Secondary navigation
    Back,
    BookAnother,
    Logout,
    /// Outer navigation left the flow (e.g. switched to a "home" view)
    LeaveFlow,
}

/// Effect descriptions returned next to the new state
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Register {
        name: String,
        phone: String,
        email: String,
        password: String,
    },
    FetchSalons,
    FetchServices { salon_id: String },
    FetchStaff { salon_id: String },
    FetchSchedules { staff_id: String },
    CreateBooking {
        user_id: String,
        salon_id: String,
        service_ids: Vec<String>,
        staff_id: String,
        time: String,
    },
}

/// Apply one event, producing the next state and the commands to run
pub fn reduce(mut state: FlowState, event: FlowEvent) -> (FlowState, Vec<Command>) {
    let mut commands = Vec::new();

    match event {
        FlowEvent::SubmitLogin { email, password } => {
            state.notice = None;
            commands.push(Command::Login { email, password });
        }
        FlowEvent::LoginSucceeded(profile) => {
            state.user = Some(profile);
            state.clear_selections();
            state.step = Step::SalonSelect;
            commands.push(Command::FetchSalons);
        }
        FlowEvent::LoginFailed(message) => {
            state.notice = Some(message);
        }
        FlowEvent::GoToSignup => {
            state.notice = None;
            state.step = Step::Signup;
        }
        FlowEvent::GoToLogin => {
            state.notice = None;
            state.step = Step::Login;
        }
        FlowEvent::SubmitSignup {
            name,
            phone,
            email,
            password,
            confirm_password,
        } => {
            if password != confirm_password {
                state.notice = Some(NOTICE_PASSWORDS_MISMATCH.to_string());
            } else {
                state.notice = None;
                commands.push(Command::Register {
                    name,
                    phone,
                    email,
                    password,
                });
            }
        }
        FlowEvent::SignupSucceeded { email } => {
            state.login_email = email;
            state.step = Step::Login;
            state.notice = Some("Registration successful. Please login.".to_string());
        }
        FlowEvent::SignupFailed(message) => {
            state.notice = Some(message);
        }

        FlowEvent::PickSalon(salon) => {
            if state.step == Step::SalonSelect {
                let salon_id = salon.id.clone();
                state.selected_salon = Some(salon);
                state.services.clear();
                state.selected_services.clear();
                state.notice = None;
                state.step = Step::ServiceSelect;
                commands.push(Command::FetchServices { salon_id });
            }
        }
        FlowEvent::ToggleService(service) => {
            if state.step == Step::ServiceSelect {
                if state.is_service_selected(&service.id) {
                    state.selected_services.retain(|s| s.id != service.id);
                } else {
                    state.selected_services.push(service);
                }
            }
        }
        FlowEvent::Continue => {
            if state.step == Step::ServiceSelect {
                if state.selected_services.is_empty() {
                    state.notice = Some(NOTICE_SELECT_A_SERVICE.to_string());
                } else if let Some(salon) = &state.selected_salon {
                    state.notice = None;
                    state.step = Step::StaffSelect;
                    commands.push(Command::FetchStaff {
                        salon_id: salon.id.clone(),
                    });
                }
            }
        }
        FlowEvent::PickStaff(staff) => {
            if state.step == Step::StaffSelect {
                let staff_id = staff.id.clone();
                state.selected_staff = Some(staff);
                state.notice = None;
                state.step = Step::ScheduleSelect;
                commands.push(Command::FetchSchedules { staff_id });
            }
        }
        FlowEvent::PickSlot(slot) => {
            // Guard: unavailable slots are a no-op
            if state.step == Step::ScheduleSelect && slot.is_available {
                state.selected_schedule = Some(slot);
                state.notice = None;
                state.step = Step::Confirmation;
            }
        }
        FlowEvent::Confirm => {
            if state.step == Step::Confirmation {
                if let (Some(user), Some(salon), Some(staff), Some(slot)) = (
                    &state.user,
                    &state.selected_salon,
                    &state.selected_staff,
                    &state.selected_schedule,
                ) {
                    commands.push(Command::CreateBooking {
                        user_id: user.id.clone(),
                        salon_id: salon.id.clone(),
                        service_ids: state
                            .selected_services
                            .iter()
                            .map(|s| s.id.clone())
                            .collect(),
                        staff_id: staff.id.clone(),
                        time: slot.time.clone(),
                    });
                }
            }
        }

        FlowEvent::SalonsLoaded(salons) => {
            state.salons = salons;
        }
        FlowEvent::ServicesLoaded(services) => {
            state.services = services;
        }
        FlowEvent::StaffLoaded(staff) => {
            state.staff = staff;
        }
        FlowEvent::SchedulesLoaded(schedules) => {
            state.schedules = schedules;
        }
        FlowEvent::BookingCreated(booking) => {
            state.bookings.push(booking);
            state.notice = None;
            state.step = Step::Success;
        }
        FlowEvent::BookingFailed(message) => {
            state.notice = Some(message);
        }

        FlowEvent::Back => match state.step {
            Step::ServiceSelect => {
                state.selected_services.clear();
                state.services.clear();
                state.notice = None;
                state.step = Step::SalonSelect;
            }
            Step::StaffSelect => {
                state.selected_staff = None;
                state.staff.clear();
                state.notice = None;
                state.step = Step::ServiceSelect;
            }
            Step::ScheduleSelect => {
                state.selected_schedule = None;
                state.schedules.clear();
                state.notice = None;
                state.step = Step::StaffSelect;
            }
            Step::Confirmation => {
                // No selection to clear on this edge
                state.notice = None;
                state.step = Step::ScheduleSelect;
            }
            // Back is unavailable from Login, Signup, SalonSelect, Success
            _ => {}
        },
        FlowEvent::BookAnother => {
            if state.step == Step::Success {
                state.clear_selections();
                state.step = Step::SalonSelect;
                commands.push(Command::FetchSalons);
            }
        }
        FlowEvent::Logout => {
            state = FlowState::default();
        }
        FlowEvent::LeaveFlow => {
            // Safety net against stale partial selections: leaving the flow
            // mid-wizard resets to the first authenticated step.
            let mid_flow = !matches!(state.step, Step::Login | Step::Signup | Step::SalonSelect);
            if state.user.is_some() && mid_flow {
                state.clear_selections();
                state.step = Step::SalonSelect;
                commands.push(Command::FetchSalons);
            }
        }
    }

    (state, commands)
}
