// ABOUTME: Text message carrying special SMS message indications (voicemail, fax, email, video waiting)
// ABOUTME: Emits one message-waiting header element per indication

use crate::codec::Result;
use crate::datatypes::{MwiProfile, MwiType, UdhElement, UserData};
use crate::message::{Message, TextMessage};

/// A message waiting indication with optional text.
///
/// # Examples
///
/// ```rust
/// use smscodec::{Message, MwiMessage, MwiType};
///
/// let mwi = MwiMessage::new("You have 2 new voicemails")
///     .with_indication(MwiType::Voice, 2)
///     .store();
/// assert_eq!(mwi.udh_elements().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MwiMessage {
    text: TextMessage,
    indications: Vec<(MwiType, u32)>,
    profile: MwiProfile,
    store: bool,
}

impl MwiMessage {
    pub fn new(text: impl Into<TextMessage>) -> Self {
        Self {
            text: text.into(),
            indications: Vec::new(),
            profile: MwiProfile::default(),
            store: false,
        }
    }

    /// Adds an indication; counts above 255 are sent as 255
    pub fn with_indication(mut self, kind: MwiType, count: u32) -> Self {
        self.indications.push((kind, count));
        self
    }

    pub fn with_profile(mut self, profile: MwiProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Ask the handset to store the message after updating its indicators
    pub fn store(mut self) -> Self {
        self.store = true;
        self
    }

    pub fn indications(&self) -> &[(MwiType, u32)] {
        &self.indications
    }
}

impl Message for MwiMessage {
    fn user_data(&self) -> Result<UserData> {
        self.text.user_data()
    }

    fn udh_elements(&self) -> Vec<UdhElement> {
        self.indications
            .iter()
            .map(|&(kind, count)| {
                UdhElement::message_waiting(kind, count, self.profile, self.store)
            })
            .collect()
    }
}
