use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use souq_app_core::modal::TelecomProvider;
use souq_app_core::viewmodel::format_thousands;
use souq_app_core::{i18n, seed, Locale};
use souq_core::filter::{project, DoctorFilter, PropertyFilter, Selector, SiteFilter};
use souq_core::validate::{validate_invoice, validate_mobile};
use souq_core::{stub, Currency, Governorate, Specialty};

fn parse_governorate(key: &str) -> Result<Governorate> {
    Governorate::from_key(key)
        .with_context(|| format!("unknown governorate '{key}', expected a key like 'damascus'"))
}

pub fn cmd_properties(
    currency: Currency,
    max_price: Option<u64>,
    max_area: Option<u32>,
    floor: Option<u8>,
    governorate: Option<String>,
    json: bool,
) -> Result<()> {
    let catalog = seed::properties();
    let mut filter = PropertyFilter::for_catalog(&catalog);
    filter.set_currency(currency);
    if let Some(price) = max_price {
        filter.price_max = price;
    }
    if let Some(area) = max_area {
        filter.area_max = area;
    }
    if let Some(floor) = floor {
        filter.floor = Selector::Only(floor);
    }
    if let Some(key) = governorate {
        filter.governorate = Selector::Only(parse_governorate(&key)?);
    }

    let visible = project(&catalog, &filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(":: {} of {} listings", visible.len(), catalog.len());
    for p in visible {
        println!(
            "   [{}] {} | {} {} | {} m² | {}",
            p.id,
            p.title,
            format_thousands(p.price.amount),
            p.price.currency.code(),
            p.area,
            i18n::governorate_name(Locale::En, p.governorate),
        );
    }
    Ok(())
}

pub fn cmd_doctors(
    specialty: Option<Specialty>,
    governorate: Option<String>,
    json: bool,
) -> Result<()> {
    let catalog = seed::doctors();
    let mut filter = DoctorFilter::default();
    if let Some(s) = specialty {
        filter.specialty = Selector::Only(s);
    }
    if let Some(key) = governorate {
        filter.governorate = Selector::Only(parse_governorate(&key)?);
    }

    let visible = project(&catalog, &filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(":: {} of {} doctors", visible.len(), catalog.len());
    for d in visible {
        println!(
            "   [{}] {} | {} | {}",
            d.id,
            d.name,
            i18n::specialty_name(Locale::En, d.specialty),
            i18n::governorate_name(Locale::En, d.governorate),
        );
    }
    Ok(())
}

pub fn cmd_sites(governorate: Option<String>, json: bool) -> Result<()> {
    let catalog = seed::tourist_sites();
    let mut filter = SiteFilter::default();
    if let Some(key) = governorate {
        filter.governorate = Selector::Only(parse_governorate(&key)?);
    }

    let visible = project(&catalog, &filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(":: {} of {} sites", visible.len(), catalog.len());
    for s in visible {
        println!(
            "   [{}] {} | {} | {} photos",
            s.id,
            s.name,
            i18n::governorate_name(Locale::En, s.governorate),
            s.image_urls.len(),
        );
    }
    Ok(())
}

pub fn cmd_hotels(json: bool) -> Result<()> {
    let catalog = seed::hotels();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!(":: {} hotels", catalog.len());
    for h in &catalog {
        println!(
            "   [{}] {} | {} SYP/night | rated {:.1}",
            h.id,
            h.name,
            format_thousands(h.price_per_night),
            h.rating,
        );
    }
    Ok(())
}

pub fn cmd_shipments(json: bool) -> Result<()> {
    let catalog = seed::shipments();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!(":: {} shipment offers", catalog.len());
    for s in &catalog {
        println!(
            "   [{}] {} | {} | {} to {} | {} {}",
            s.id,
            s.company_name,
            i18n::truck_size_name(Locale::En, s.truck_size),
            s.origin,
            s.destination,
            format_thousands(s.price.amount),
            s.price.currency.code(),
        );
    }
    Ok(())
}

pub fn cmd_account(json: bool) -> Result<()> {
    let account = seed::account();
    if json {
        println!("{}", serde_json::to_string_pretty(&account.transactions)?);
        return Ok(());
    }

    println!(":: {} | balance {} SYP", account.holder_name, format_thousands(account.balance_syp));
    for tx in &account.transactions {
        println!(
            "   [{}] {} | {} | {} SYP",
            tx.id,
            tx.date,
            i18n::transaction_kind_name(Locale::En, tx.kind),
            format_thousands(tx.amount),
        );
    }
    Ok(())
}

/// Simulated telecom bill inquiry and payment, with the same delay the
/// desktop dialog shows.
pub fn cmd_pay_telecom(provider: TelecomProvider, number: String) -> Result<()> {
    validate_mobile(&number)?;

    println!(
        ":: Inquiring {} for {}",
        i18n::provider_name(Locale::En, provider),
        number.trim(),
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Looking up bill...");
    pb.enable_steady_tick(Duration::from_millis(100));

    std::thread::sleep(Duration::from_millis(souq_config::INQUIRY_DELAY_MS));
    let amount = stub::telecom_bill_amount(&number);
    pb.finish_with_message(format!("Bill amount: {} SYP", format_thousands(amount)));

    println!(":: Payment confirmed.");
    Ok(())
}

pub fn cmd_pay_invoice(service: &str, invoice: String) -> Result<()> {
    validate_invoice(&invoice)?;

    let amount = stub::invoice_amount_preview(&invoice);
    println!(
        ":: Paying {service} invoice {} | {} SYP",
        invoice.trim(),
        format_thousands(amount),
    );
    println!(":: Payment confirmed.");
    Ok(())
}
