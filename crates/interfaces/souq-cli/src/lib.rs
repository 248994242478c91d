pub mod commands;

use clap::ValueEnum;
use souq_core::{Currency, Specialty};

use souq_app_core::modal::TelecomProvider;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliCurrency {
    Syp,
    Usd,
}

impl From<CliCurrency> for Currency {
    fn from(c: CliCurrency) -> Self {
        match c {
            CliCurrency::Syp => Currency::Syp,
            CliCurrency::Usd => Currency::Usd,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliSpecialty {
    Cardiology,
    Dermatology,
    Pediatrics,
    Neurology,
}

impl From<CliSpecialty> for Specialty {
    fn from(s: CliSpecialty) -> Self {
        match s {
            CliSpecialty::Cardiology => Specialty::Cardiology,
            CliSpecialty::Dermatology => Specialty::Dermatology,
            CliSpecialty::Pediatrics => Specialty::Pediatrics,
            CliSpecialty::Neurology => Specialty::Neurology,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliProvider {
    Syriatel,
    Mtn,
    SyrianTelecom,
}

impl From<CliProvider> for TelecomProvider {
    fn from(p: CliProvider) -> Self {
        match p {
            CliProvider::Syriatel => TelecomProvider::Syriatel,
            CliProvider::Mtn => TelecomProvider::Mtn,
            CliProvider::SyrianTelecom => TelecomProvider::SyrianTelecom,
        }
    }
}
