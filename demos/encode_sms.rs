// ABOUTME: Example application that encodes a text message into hex SMS-SUBMIT TPDUs
// ABOUTME: Prints one line per part, ready for an AT+CMGS session on a GSM modem

use argh::FromArgs;
use smscodec::charset::decode_gsm7;
use smscodec::septet::unpack_septets;
use smscodec::{Address, Alphabet, Encodable, SmsEncoder, SmsSubmit, TextMessage, ValidityPeriod};
use std::error::Error;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Encode a text message into SMS-SUBMIT PDUs
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debug logging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// the message to encode
    #[argh(option, short = 'm')]
    message: String,

    /// the recipient telephone number
    #[argh(option, short = 't')]
    to: String,

    /// the service centre number (default: the one stored on the SIM)
    #[argh(option)]
    smsc: Option<String>,

    /// force UCS-2 even when the text fits the GSM alphabet
    #[argh(switch)]
    ucs2: bool,

    /// use 16-bit concatenation references
    #[argh(switch)]
    wide_reference: bool,

    /// validity period in hours
    #[argh(option)]
    validity_hours: Option<u64>,

    /// request a delivery status report
    #[argh(switch)]
    status_report: bool,
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let message = if cli_args.ucs2 {
        TextMessage::with_alphabet(cli_args.message, Alphabet::Ucs2)
    } else {
        TextMessage::auto(cli_args.message)
    };

    let mut builder = SmsEncoder::builder();
    if cli_args.wide_reference {
        builder = builder.sixteen_bit_reference();
    }
    let encoder = builder.build()?;
    let parts = encoder.encode(&message)?;

    let mut submit = SmsSubmit::new(Address::new(&cli_args.to)?);
    if let Some(smsc) = cli_args.smsc {
        submit = submit.with_smsc(Address::new(&smsc)?);
    }
    if let Some(hours) = cli_args.validity_hours {
        submit = submit.with_validity(ValidityPeriod::from_duration(Duration::from_secs(
            hours * 3600,
        )));
    }
    if cli_args.status_report {
        submit = submit.with_status_report();
    }

    println!(
        "{} part(s), data coding {}",
        parts.len(),
        message.dcs()
    );
    for (pdu, tpdu) in parts.iter().zip(submit.encode_parts(&parts)?) {
        // AT+CMGS takes the TPDU length without the SMSC field
        let smsc_len = usize::from(tpdu[0]) + 1;
        println!(
            "AT+CMGS={}  ({} user data octets)",
            tpdu.len() - smsc_len,
            pdu.encoded_size()
        );
        println!("{}", hex(&tpdu));
        if pdu.dcs().alphabet() == Some(Alphabet::Gsm7) {
            let user_data = pdu.user_data();
            let septets = unpack_septets(user_data.bytes(), user_data.length());
            println!("  {:?}", decode_gsm7(&septets));
        }
    }

    Ok(())
}
