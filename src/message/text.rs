// ABOUTME: Plain text message encoded as GSM 7-bit, Latin-1 or UCS-2 user data
// ABOUTME: Picks the payload encoding from the data coding scheme's alphabet

use crate::charset;
use crate::codec::{CodecError, Result};
use crate::datatypes::{Alphabet, DataCoding, MessageClass, UserData};
use crate::message::Message;
use crate::septet::pack_septets;

/// A text message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessage {
    text: String,
    dcs: DataCoding,
}

impl TextMessage {
    /// GSM 7-bit text with no message class
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_dcs(text, DataCoding::GSM7)
    }

    pub fn with_alphabet(text: impl Into<String>, alphabet: Alphabet) -> Self {
        Self::with_dcs(text, DataCoding::general(alphabet, None))
    }

    /// Text with an explicit data coding scheme.
    ///
    /// The alphabet is checked when the user data is built.
    pub fn with_dcs(text: impl Into<String>, dcs: DataCoding) -> Self {
        Self {
            text: text.into(),
            dcs,
        }
    }

    /// GSM 7-bit when every character has a GSM form, UCS-2 otherwise
    pub fn auto(text: impl Into<String>) -> Self {
        let text = text.into();
        let alphabet = charset::best_alphabet(&text);
        Self::with_alphabet(text, alphabet)
    }

    /// Keeps the alphabet and sets the message class (class 0 is a flash message).
    ///
    /// Fails with [`CodecError::UnsupportedAlphabet`] when the current data
    /// coding scheme has no decidable alphabet to carry over.
    pub fn with_class(self, class: MessageClass) -> Result<Self> {
        let alphabet = self
            .dcs
            .alphabet()
            .ok_or(CodecError::UnsupportedAlphabet(self.dcs))?;
        Ok(Self {
            dcs: DataCoding::general(alphabet, Some(class)),
            ..self
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn dcs(&self) -> DataCoding {
        self.dcs
    }
}

impl Message for TextMessage {
    fn user_data(&self) -> Result<UserData> {
        match self.dcs.alphabet() {
            Some(Alphabet::Gsm7) => {
                let septets = charset::encode_gsm7(&self.text)?;
                UserData::new(pack_septets(&septets), septets.len(), self.dcs)
            }
            Some(Alphabet::Latin1) => {
                UserData::octets(charset::encode_latin1(&self.text)?, self.dcs)
            }
            Some(Alphabet::Ucs2) => UserData::octets(charset::encode_ucs2(&self.text), self.dcs),
            Some(Alphabet::Reserved) | None => Err(CodecError::UnsupportedAlphabet(self.dcs)),
        }
    }
}

impl From<&str> for TextMessage {
    fn from(text: &str) -> Self {
        Self::auto(text)
    }
}

impl From<String> for TextMessage {
    fn from(text: String) -> Self {
        Self::auto(text)
    }
}
