use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fhir::{Patient, PatientIdentity, DEFAULT_NIC_SYSTEM};
use nic_core::{decoder_config_from_env_value, DecodeError, Decoder, FormatVariant, Sex};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nic")]
#[command(about = "Sri Lankan NIC number decoder CLI")]
struct Cli {
    /// Century added to two-digit legacy years (default 1900)
    #[arg(long, global = true, env = "NIC_LEGACY_CENTURY")]
    legacy_century: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one or more NIC numbers
    Decode {
        /// NIC numbers in either layout
        #[arg(required = true)]
        nics: Vec<String>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
        /// Also report age on this date (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Encode a birth date and sex as an NIC number
    Encode {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,
        /// male or female
        #[arg(long)]
        sex: Sex,
        /// Write the 10-character legacy layout instead of the 12-digit one
        #[arg(long)]
        legacy: bool,
        /// Trailing serial digits
        #[arg(long, default_value_t = 0)]
        serial: u32,
    },
    /// Rewrite a legacy number in the 12-digit layout
    ToModern {
        /// Legacy NIC number
        nic: String,
    },
    /// Print a FHIR Patient fragment for an NIC number
    Fhir {
        /// NIC number in either layout
        nic: String,
        /// Identifier system URI
        #[arg(long, default_value = DEFAULT_NIC_SYSTEM)]
        system: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let decoder = Decoder::new(decoder_config_from_env_value(cli.legacy_century)?);

    match cli.command {
        Some(Commands::Decode { nics, json, as_of }) => {
            let mut failed = false;
            for nic in &nics {
                match decode_line(&decoder, nic, as_of, json) {
                    Ok(line) => println!("{line}"),
                    Err(line) => {
                        failed = true;
                        if json {
                            println!("{line}");
                        } else {
                            eprintln!("{line}");
                        }
                    }
                }
            }
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Encode {
            birth_date,
            sex,
            legacy,
            serial,
        }) => {
            let format = if legacy {
                FormatVariant::Legacy
            } else {
                FormatVariant::Modern
            };
            match decoder.encode(birth_date, sex, format, serial) {
                Ok(nic) => println!("{nic}"),
                Err(e) => {
                    eprintln!("Error encoding NIC: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::ToModern { nic }) => match decoder.to_modern(&nic) {
            Ok(modern) => println!("{modern}"),
            Err(e) => {
                eprintln!("Error converting {nic}: {e}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Some(Commands::Fhir { nic, system }) => {
            match PatientIdentity::from_nic(system, &nic, &decoder) {
                Ok(identity) => print!("{}", Patient::render(&identity)?),
                Err(e) => {
                    eprintln!("Error building patient for {nic}: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        None => {
            println!("Use 'nic --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Render the outcome for one input. `Err` carries the line for a failed decode.
fn decode_line(
    decoder: &Decoder,
    nic: &str,
    as_of: Option<NaiveDate>,
    json: bool,
) -> Result<String, String> {
    match decoder.decode(nic) {
        Ok(identity) => {
            let age = as_of.and_then(|on| identity.age_on(on));
            if json {
                let mut value = serde_json::json!({
                    "nic": nic,
                    "format": identity.format.to_wire(),
                    "birth_date": identity.birth_date.to_string(),
                    "sex": identity.sex.to_wire(),
                });
                if let Some(age) = age {
                    value["age"] = age.into();
                }
                Ok(value.to_string())
            } else {
                let mut line = format!(
                    "{nic}: {} {} ({})",
                    identity.birth_date, identity.sex, identity.format
                );
                if let Some(age) = age {
                    line.push_str(&format!(", age {age}"));
                }
                Ok(line)
            }
        }
        Err(err) => Err(render_error(nic, &err, json)),
    }
}

fn render_error(nic: &str, err: &DecodeError, json: bool) -> String {
    if json {
        let mut value = serde_json::json!({
            "nic": nic,
            "error": err.kind().as_str(),
            "message": err.to_string(),
        });
        if let Some(sex) = err.sex() {
            value["sex"] = sex.to_wire().into();
        }
        return value.to_string();
    }

    match err.sex() {
        Some(sex) => format!("{nic}: {} (sex: {sex}): {err}", err.kind()),
        None => format!("{nic}: {}: {err}", err.kind()),
    }
}
