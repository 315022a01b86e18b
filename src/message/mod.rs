// ABOUTME: Application-level messages that produce user data and header elements for the encoder
// ABOUTME: Text, message waiting indication and port-addressed payloads behind one trait

mod mwi;
pub mod port;
mod text;

pub use mwi::MwiMessage;
pub use port::PortAddressedMessage;
pub use text::TextMessage;

use crate::codec::Result;
use crate::datatypes::{UdhElement, UserData};

/// A message the encoder can split and assemble
///
/// Implementations only describe their content: the payload in its final
/// encoding and any header elements it needs. Concatenation is added by the
/// encoder, never by the message.
pub trait Message {
    /// Encoded payload with its length and data coding scheme
    ///
    /// Fails when the content cannot be represented in the message's alphabet.
    fn user_data(&self) -> Result<UserData>;

    /// Header elements, freshly built on every call
    fn udh_elements(&self) -> Vec<UdhElement> {
        Vec::new()
    }
}

impl<M: Message + ?Sized> Message for &M {
    fn user_data(&self) -> Result<UserData> {
        (**self).user_data()
    }

    fn udh_elements(&self) -> Vec<UdhElement> {
        (**self).udh_elements()
    }
}

impl<M: Message + ?Sized> Message for Box<M> {
    fn user_data(&self) -> Result<UserData> {
        (**self).user_data()
    }

    fn udh_elements(&self) -> Vec<UdhElement> {
        (**self).udh_elements()
    }
}
