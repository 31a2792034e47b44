//! `pomade book` - the interactive booking wizard
//!
//! The wizard is a thin driver over the pure flow reducer: each prompt turns
//! the user's answer into flow events, `drive` applies them and executes the
//! commands the reducer emits, feeding completion events back in until the
//! machine settles. All transition logic lives in
//! [`crate::domain::services::flow`]; this file only renders and prompts.

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};
use is_terminal::IsTerminal;

use crate::domain::services::flow::{self, Command, FlowEvent, FlowState};
use crate::domain::value_objects::Step;
use crate::error::PomadeError;
use crate::presentation::{output, ConcreteClient};

/// Events produced by one prompt; `None` means the user chose to quit
type PromptOutcome = Option<Vec<FlowEvent>>;

pub fn cmd_book(client: &ConcreteClient) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        println!("The booking wizard needs an interactive terminal.");
        println!("Try `pomade call getSalons` for the raw service surface.");
        return Ok(());
    }

    println!("Pomade - salon booking\n");

    let mut state = FlowState::default();
    loop {
        if let Some(notice) = state.notice.take() {
            println!("! {}\n", notice);
        }

        let outcome = match state.step {
            Step::Login => prompt_login(&state)?,
            Step::Signup => prompt_signup()?,
            Step::SalonSelect => prompt_salon(&state)?,
            Step::ServiceSelect => prompt_services(&state)?,
            Step::StaffSelect => prompt_staff(&state)?,
            Step::ScheduleSelect => prompt_schedule(&state)?,
            Step::Confirmation => prompt_confirmation(&state)?,
            Step::Success => prompt_success(&state)?,
        };

        let Some(events) = outcome else {
            break;
        };
        for event in events {
            state = drive(client, state, event)?;
        }
    }

    Ok(())
}

/// Apply an event, execute the emitted commands, and feed the completion
/// events back in until no commands remain
fn drive(client: &ConcreteClient, state: FlowState, event: FlowEvent) -> Result<FlowState> {
    let mut state = state;
    let mut pending = vec![event];
    while let Some(event) = pending.pop() {
        let (next, commands) = flow::reduce(state, event);
        state = next;
        for command in commands {
            pending.push(execute(client, command)?);
        }
    }
    Ok(state)
}

/// Run one command against the service client, returning its completion event
fn execute(client: &ConcreteClient, command: Command) -> Result<FlowEvent> {
    Ok(match command {
        Command::Login { email, password } => {
            let result = client.login(&email, &password)?;
            match result.user {
                Some(user) if result.success => FlowEvent::LoginSucceeded(user),
                _ => FlowEvent::LoginFailed(result.message),
            }
        }
        Command::Register {
            name,
            phone,
            email,
            password,
        } => {
            let result = client.register(&name, &phone, &email, &password)?;
            if result.success {
                FlowEvent::SignupSucceeded { email }
            } else {
                FlowEvent::SignupFailed(result.message)
            }
        }
        Command::FetchSalons => FlowEvent::SalonsLoaded(client.get_salons()?),
        Command::FetchServices { salon_id } => {
            FlowEvent::ServicesLoaded(client.get_services(&salon_id)?)
        }
        Command::FetchStaff { salon_id } => FlowEvent::StaffLoaded(client.get_staff(&salon_id)?),
        Command::FetchSchedules { staff_id } => {
            FlowEvent::SchedulesLoaded(client.get_staff_schedules(&staff_id)?)
        }
        Command::CreateBooking {
            user_id,
            salon_id,
            service_ids,
            staff_id,
            time,
        } => match client.create_booking(&user_id, &salon_id, &service_ids, &staff_id, &time) {
            Ok(booking) => FlowEvent::BookingCreated(booking),
            // Resolution failures become an alert; the wizard stays interactive.
            Err(e @ PomadeError::NotFound { .. }) => FlowEvent::BookingFailed(e.to_string()),
            Err(e) => return Err(e.into()),
        },
    })
}

fn prompt_login(state: &FlowState) -> Result<PromptOutcome> {
    let items = vec!["Login", "Create an account", "Quit"];
    let selection = Select::new()
        .with_prompt("Welcome")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            let email: String = Input::new()
                .with_prompt("Email")
                .with_initial_text(state.login_email.clone())
                .interact_text()?;
            let password = Password::new().with_prompt("Password").interact()?;
            Ok(Some(vec![FlowEvent::SubmitLogin { email, password }]))
        }
        1 => Ok(Some(vec![FlowEvent::GoToSignup])),
        _ => Ok(None),
    }
}

fn prompt_signup() -> Result<PromptOutcome> {
    let items = vec!["Fill in the signup form", "Back to login"];
    let selection = Select::new()
        .with_prompt("Create an account")
        .items(&items)
        .default(0)
        .interact()?;
    if selection == 1 {
        return Ok(Some(vec![FlowEvent::GoToLogin]));
    }

    // Blank answers are allowed through so the service's own validation
    // messages show, exactly as in the mobile app.
    let name: String = Input::new()
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text()?;
    let phone: String = Input::new()
        .with_prompt("Phone")
        .allow_empty(true)
        .interact_text()?;
    let email: String = Input::new()
        .with_prompt("Email")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    let confirm_password = Password::new()
        .with_prompt("Confirm password")
        .allow_empty_password(true)
        .interact()?;

    Ok(Some(vec![FlowEvent::SubmitSignup {
        name,
        phone,
        email,
        password,
        confirm_password,
    }]))
}

fn prompt_salon(state: &FlowState) -> Result<PromptOutcome> {
    let mut items: Vec<String> = state
        .salons
        .iter()
        .map(|s| format!("{}  ({:.1}) - {}", s.name, s.rating, s.address))
        .collect();
    items.push("Logout".to_string());
    items.push("Quit".to_string());

    let selection = Select::new()
        .with_prompt("Choose a salon")
        .items(&items)
        .default(0)
        .interact()?;

    if selection < state.salons.len() {
        return Ok(Some(vec![FlowEvent::PickSalon(
            state.salons[selection].clone(),
        )]));
    }
    match selection - state.salons.len() {
        0 => Ok(Some(vec![FlowEvent::Logout])),
        _ => Ok(None),
    }
}

fn prompt_services(state: &FlowState) -> Result<PromptOutcome> {
    if state.services.is_empty() {
        println!("This salon has no services listed.\n");
        return Ok(Some(vec![FlowEvent::Back]));
    }

    let items: Vec<String> = state
        .services
        .iter()
        .map(|s| format!("{} (${:.2})", s.name, s.price))
        .collect();
    let defaults: Vec<bool> = state
        .services
        .iter()
        .map(|s| state.is_service_selected(&s.id))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Select services (space toggles, enter continues)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    // Translate the final choices into toggle events so the selection set in
    // the flow state matches what is on screen.
    let mut events = Vec::new();
    for (i, service) in state.services.iter().enumerate() {
        let picked_now = picked.contains(&i);
        if picked_now != state.is_service_selected(&service.id) {
            events.push(FlowEvent::ToggleService(service.clone()));
        }
    }

    let next = Select::new()
        .with_prompt(format!("Total so far: ${:.2}", total_after(state, &events)))
        .items(&["Continue", "Back to salons"])
        .default(0)
        .interact()?;
    events.push(if next == 0 {
        FlowEvent::Continue
    } else {
        FlowEvent::Back
    });

    Ok(Some(events))
}

/// Total price as it will be once the pending toggles are applied
fn total_after(state: &FlowState, events: &[FlowEvent]) -> f64 {
    let mut total = state.total_price();
    for event in events {
        if let FlowEvent::ToggleService(service) = event {
            if state.is_service_selected(&service.id) {
                total -= service.price;
            } else {
                total += service.price;
            }
        }
    }
    total
}

fn prompt_staff(state: &FlowState) -> Result<PromptOutcome> {
    if state.staff.is_empty() {
        println!("No staff available at this salon.\n");
        return Ok(Some(vec![FlowEvent::Back]));
    }

    let mut items: Vec<String> = state
        .staff
        .iter()
        .map(|s| format!("{} - {}", s.name, s.specialization))
        .collect();
    items.push("Back to services".to_string());

    let selection = Select::new()
        .with_prompt("Choose a stylist")
        .items(&items)
        .default(0)
        .interact()?;

    if selection < state.staff.len() {
        Ok(Some(vec![FlowEvent::PickStaff(
            state.staff[selection].clone(),
        )]))
    } else {
        Ok(Some(vec![FlowEvent::Back]))
    }
}

fn prompt_schedule(state: &FlowState) -> Result<PromptOutcome> {
    if state.schedules.is_empty() {
        println!("No time slots for this stylist.\n");
        return Ok(Some(vec![FlowEvent::Back]));
    }

    let mut items: Vec<String> = state
        .schedules
        .iter()
        .map(|s| {
            if s.is_available {
                s.time.clone()
            } else {
                format!("{} (booked)", s.time)
            }
        })
        .collect();
    items.push("Back to stylists".to_string());

    let selection = Select::new()
        .with_prompt("Choose a time")
        .items(&items)
        .default(0)
        .interact()?;

    if selection < state.schedules.len() {
        let slot = state.schedules[selection].clone();
        if !slot.is_available {
            println!("That time is already booked - pick another.\n");
        }
        Ok(Some(vec![FlowEvent::PickSlot(slot)]))
    } else {
        Ok(Some(vec![FlowEvent::Back]))
    }
}

fn prompt_confirmation(state: &FlowState) -> Result<PromptOutcome> {
    println!("\nYour booking:");
    print!("{}", output::render_confirmation(state));

    let confirmed = Confirm::new()
        .with_prompt("Confirm this booking?")
        .default(true)
        .interact()?;

    Ok(Some(vec![if confirmed {
        FlowEvent::Confirm
    } else {
        FlowEvent::Back
    }]))
}

fn prompt_success(state: &FlowState) -> Result<PromptOutcome> {
    if let Some(booking) = state.bookings.last() {
        println!("\nBooking confirmed!");
        println!("  {}\n", output::render_booking(booking));
    }

    let items = vec!["Book another", "View my bookings", "Logout", "Quit"];
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => Ok(Some(vec![FlowEvent::BookAnother])),
        1 => {
            println!();
            for booking in &state.bookings {
                println!("  {}", output::render_booking(booking));
            }
            println!();
            // No state change - loop back to this menu.
            Ok(Some(Vec::new()))
        }
        2 => Ok(Some(vec![FlowEvent::Logout])),
        _ => Ok(None),
    }
}
