// ABOUTME: Wire-level SMS datatypes: addresses, data coding, user data and header elements
// ABOUTME: Re-exports every datatype so callers can import from `smscodec::datatypes`

mod address;
mod data_coding;
mod numeric_plan_indicator;
mod type_of_number;
pub mod udh;
mod user_data;

pub use address::{Address, AddressError};
pub use data_coding::{Alphabet, DataCoding, DcsGroup, MessageClass, MessageWaitingType};
pub use numeric_plan_indicator::NumericPlanIndicator;
pub use type_of_number::TypeOfNumber;
pub use udh::{InformationElementId, MwiProfile, MwiType, UdhElement};
pub use user_data::UserData;
