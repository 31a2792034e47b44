//! Request/response envelope transport
//!
//! The wire contract: a request envelope names an operation and carries its
//! arguments as a JSON object; the response envelope carries either `data`
//! or an `errors` list. Operation and argument names are camelCase, exactly
//! as published:
//!
//! ```text
//! getSalons() -> Salon[]
//! getServices(salonId) -> Service[]
//! getStaff(salonId) -> Staff[]
//! getStaffSchedules(staffId) -> Schedule[]
//! getBookings(userId) -> Booking[]
//! createBooking(userId, salonId, serviceIds, staffId, time) -> Booking
//! register(name, phone, email, password) -> AuthResult
//! login(email, password) -> AuthResult
//! ```
//!
//! Dispatch is in-process here; putting these envelopes on a socket is a
//! deployment detail the core does not depend on.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ServiceClient;
use crate::domain::ports::{DocumentStore, IdGenerator};
use crate::error::{PomadeError, PomadeResult};

/// A request envelope: operation name plus arguments object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub operation: String,
    #[serde(default)]
    pub args: Value,
}

impl Request {
    pub fn new(operation: impl Into<String>, args: Value) -> Self {
        Self {
            operation: operation.into(),
            args,
        }
    }
}

/// A response envelope: `data` on success, `errors` on failure, never both
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
}

impl Response {
    pub fn data(value: Value) -> Self {
        Self {
            data: Some(value),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(vec![ResponseError {
                message: message.into(),
            }]),
        }
    }

    pub fn is_error(&self) -> bool {
        self.errors.is_some()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SalonIdArgs {
    salon_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StaffIdArgs {
    staff_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserIdArgs {
    user_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingArgs {
    user_id: String,
    salon_id: String,
    service_ids: Vec<String>,
    staff_id: String,
    time: String,
}

#[derive(Deserialize)]
struct RegisterArgs {
    name: String,
    phone: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginArgs {
    email: String,
    password: String,
}

/// Dispatch one request to the service client
///
/// Never panics: unknown operations, malformed arguments, and resolver
/// errors all come back as error envelopes.
pub fn dispatch<S, G>(client: &ServiceClient<S, G>, request: &Request) -> Response
where
    S: DocumentStore,
    G: IdGenerator,
{
    match run(client, request) {
        Ok(data) => Response::data(data),
        Err(e) => Response::error(e.to_string()),
    }
}

/// Parse a JSON request envelope and dispatch it
pub fn dispatch_json<S, G>(client: &ServiceClient<S, G>, text: &str) -> Response
where
    S: DocumentStore,
    G: IdGenerator,
{
    match serde_json::from_str::<Request>(text) {
        Ok(request) => dispatch(client, &request),
        Err(e) => Response::error(format!("invalid request envelope: {}", e)),
    }
}

fn run<S, G>(client: &ServiceClient<S, G>, request: &Request) -> PomadeResult<Value>
where
    S: DocumentStore,
    G: IdGenerator,
{
    let operation = request.operation.as_str();
    match operation {
        "getSalons" => to_data(&client.get_salons()?),
        "getServices" => {
            let a: SalonIdArgs = parse_args(operation, &request.args)?;
            to_data(&client.get_services(&a.salon_id)?)
        }
        "getStaff" => {
            let a: SalonIdArgs = parse_args(operation, &request.args)?;
            to_data(&client.get_staff(&a.salon_id)?)
        }
        "getStaffSchedules" => {
            let a: StaffIdArgs = parse_args(operation, &request.args)?;
            to_data(&client.get_staff_schedules(&a.staff_id)?)
        }
        "getBookings" => {
            let a: UserIdArgs = parse_args(operation, &request.args)?;
            to_data(&client.get_bookings(&a.user_id)?)
        }
        "createBooking" => {
            let a: CreateBookingArgs = parse_args(operation, &request.args)?;
            to_data(&client.create_booking(
                &a.user_id,
                &a.salon_id,
                &a.service_ids,
                &a.staff_id,
                &a.time,
            )?)
        }
        "register" => {
            let a: RegisterArgs = parse_args(operation, &request.args)?;
            to_data(&client.register(&a.name, &a.phone, &a.email, &a.password)?)
        }
        "login" => {
            let a: LoginArgs = parse_args(operation, &request.args)?;
            to_data(&client.login(&a.email, &a.password)?)
        }
        _ => Err(PomadeError::UnknownOperation {
            name: operation.to_string(),
        }),
    }
}

fn parse_args<T: DeserializeOwned>(operation: &str, args: &Value) -> PomadeResult<T> {
    serde_json::from_value(args.clone()).map_err(|e| PomadeError::InvalidArguments {
        operation: operation.to_string(),
        message: e.to_string(),
    })
}

fn to_data<T: Serialize>(value: &T) -> PomadeResult<Value> {
    Ok(serde_json::to_value(value)?)
}
