//! Interactive menu driver.
//!
//! Thin glue between stdin/stdout and the [`Marketplace`] facade: it
//! prompts, parses, prints, and routes every decision through the
//! facade. Generic over the I/O handles so whole sessions can be
//! scripted in tests.

use crate::catalog::CatalogEntry;
use crate::config::MarketConfig;
use crate::error::MarketError;
use crate::marketplace::Marketplace;
use crate::providers::{ProviderId, ServiceProvider};
use anyhow::{bail, Context, Result};
use indoc::indoc;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::str::FromStr;
use tracing::info;

const MENU: &str = indoc! {"

    1. Add Service
    2. Add User
    3. Add Service Provider
    4. Display Service Providers for a Service
    5. Request Service
    6. Rate Service Provider
    7. Exit
"};

/// The interactive application: one marketplace, one I/O pair.
pub struct App<R, W> {
    market: Marketplace,
    config: MarketConfig,
    input: R,
    output: W,
}

impl App<BufReader<Stdin>, Stdout> {
    /// Build an app wired to the real terminal.
    pub fn new(config: MarketConfig) -> Self {
        Self::with_io(config, BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Build an app over arbitrary I/O handles.
    ///
    /// Catalog entries declared in the config are added up front.
    pub fn with_io(config: MarketConfig, input: R, output: W) -> Self {
        let mut market = Marketplace::new();
        for seed in &config.services {
            market.add_catalog_entry(CatalogEntry::cleaning(
                seed.name.clone(),
                seed.uses_own_materials,
            ));
        }
        if !config.services.is_empty() {
            info!("Seeded catalog with {} service(s) from config", config.services.len());
        }
        Self {
            market,
            config,
            input,
            output,
        }
    }

    /// Borrow the underlying marketplace (used by tests to inspect state).
    pub fn market(&self) -> &Marketplace {
        &self.market
    }

    /// Tear the app apart into its marketplace and output handle.
    pub fn into_parts(self) -> (Marketplace, W) {
        (self.market, self.output)
    }

    /// Run the menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let choice = self.prompt("Enter your choice: ")?;
            match choice.as_str() {
                "1" => self.add_service()?,
                "2" => self.add_user()?,
                "3" => self.add_provider()?,
                "4" => self.show_providers_for_service()?,
                "5" => self.request_service()?,
                "6" => self.rate_provider()?,
                "7" => {
                    writeln!(self.output, "Exiting the application. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    // ------------------------------------------------------------------
    // Menu actions
    // ------------------------------------------------------------------

    fn add_service(&mut self) -> Result<()> {
        let name = self.prompt("Enter service name: ")?;
        let uses_own_materials = loop {
            let answer =
                self.prompt("Does the service use its own materials? (1 for yes, 0 for no): ")?;
            match answer.as_str() {
                "1" => break true,
                "0" => break false,
                _ => writeln!(self.output, "Please answer 1 or 0.")?,
            }
        };

        self.market
            .add_catalog_entry(CatalogEntry::cleaning(name.clone(), uses_own_materials));
        writeln!(self.output, "Added '{}' to the service catalog.", name)?;
        Ok(())
    }

    fn add_user(&mut self) -> Result<()> {
        let name = self.prompt("Enter user name: ")?;
        let contact = loop {
            let contact = self.prompt("Enter user contact: ")?;
            if self.market.is_contact_registered(&contact) {
                writeln!(
                    self.output,
                    "That contact is already registered. Try another."
                )?;
            } else {
                break contact;
            }
        };

        let profile = self.market.register_user(&name, &contact)?;
        writeln!(self.output, "{}", profile)?;
        Ok(())
    }

    fn add_provider(&mut self) -> Result<()> {
        let name = self.prompt("Enter service provider name: ")?;
        let contact = self.prompt("Enter service provider contact: ")?;
        let hourly_rate = loop {
            let rate: f64 = self.prompt_parse(&format!(
                "Enter hourly rate for services provided by {}: ",
                name
            ))?;
            if rate >= 0.0 {
                break rate;
            }
            writeln!(self.output, "Hourly rate cannot be negative.")?;
        };

        let mut provider = ServiceProvider::new(name, contact, hourly_rate);
        loop {
            let service_name =
                self.prompt("Choose a service to offer (or enter 'done' to finish): ")?;
            if service_name == "done" {
                break;
            }
            match self.market.catalog().find_by_name(&service_name) {
                Some(entry) => provider.add_service(entry.clone()),
                None => writeln!(
                    self.output,
                    "Service '{}' is not in the catalog.",
                    service_name
                )?,
            }
        }

        let id = self.market.register_provider(provider);
        self.write_provider_profile(id)?;
        Ok(())
    }

    fn show_providers_for_service(&mut self) -> Result<()> {
        let service_name =
            self.prompt("Enter the service name to see available service providers: ")?;
        let providers = self.market.providers_offering(&service_name);
        if providers.is_empty() {
            writeln!(
                self.output,
                "No service providers found for the specified service."
            )?;
            return Ok(());
        }

        writeln!(
            self.output,
            "Service providers offering {} service:",
            service_name
        )?;
        self.write_provider_list(&providers)?;
        Ok(())
    }

    fn request_service(&mut self) -> Result<()> {
        if self.market.catalog().is_empty()
            || !self.market.has_providers()
            || !self.market.has_users()
        {
            writeln!(
                self.output,
                "Please add services, users, and service providers before requesting a service."
            )?;
            return Ok(());
        }

        let user_id: u32 = self.prompt_parse("Enter your user ID: ")?;
        let Some(user) = self.market.user_by_id(user_id).cloned() else {
            writeln!(self.output, "User with user ID {} not found.", user_id)?;
            return Ok(());
        };

        let service_name = self.prompt("Enter the desired service name: ")?;
        let providers = self.market.providers_offering(&service_name);
        if providers.is_empty() {
            writeln!(
                self.output,
                "No service providers found for the specified service."
            )?;
            return Ok(());
        }

        writeln!(self.output, "Choose a service provider from the list:")?;
        self.write_provider_list(&providers)?;

        let choice: usize = self.prompt_parse("Enter your choice: ")?;
        if choice == 0 || choice > providers.len() {
            let err = MarketError::InvalidSelection {
                choice,
                max: providers.len(),
            };
            writeln!(self.output, "{}", err)?;
            return Ok(());
        }
        let provider_id = providers[choice - 1];

        let hours: u32 = self.prompt_parse("Enter the number of hours needed for the service: ")?;
        let request = match self
            .market
            .submit_request(user_id, provider_id, &service_name, hours)
        {
            Ok(request) => request,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(());
            }
        };

        let provider = self
            .market
            .provider(provider_id)
            .context("provider disappeared from the registry")?;
        let cost = request.service().cost(hours, provider.hourly_rate());

        writeln!(self.output, "\nService request submitted successfully!")?;
        writeln!(self.output, "User Contact Information:")?;
        writeln!(self.output, "{}", user)?;
        writeln!(self.output, "\nSelected Service Provider Details:")?;
        writeln!(self.output, "Name: {}", provider.name())?;
        writeln!(self.output, "Contact: {}", provider.contact())?;
        writeln!(
            self.output,
            "Hourly Rate: {}{:.2}",
            self.config.currency,
            provider.hourly_rate()
        )?;
        writeln!(self.output, "\nRequested Service Details:")?;
        writeln!(self.output, "{}", request.service())?;
        writeln!(self.output, "Hours: {}", hours)?;
        writeln!(
            self.output,
            "Estimated Cost: {}{:.2}",
            self.config.currency, cost
        )?;
        writeln!(
            self.output,
            "Requested At: {}",
            request.requested_at().format("%Y-%m-%d %H:%M")
        )?;
        Ok(())
    }

    fn rate_provider(&mut self) -> Result<()> {
        let user_id: u32 = self.prompt_parse("Enter your user ID: ")?;
        let provider_name =
            self.prompt("Enter the name of the service provider you want to rate: ")?;
        let rating: i32 = self.prompt_parse("Enter your rating (1-5) for the service provider: ")?;

        match self.market.rate_provider(user_id, &provider_name, rating) {
            Ok(()) => writeln!(self.output, "Thank you for your rating!")?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Prompt and display helpers
    // ------------------------------------------------------------------

    /// Print a prompt and read one trimmed line.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the answer parses as `T`.
    fn prompt_parse<T: FromStr>(&mut self, message: &str) -> Result<T> {
        loop {
            let answer = self.prompt(message)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Print a 1-based provider listing with rates and ratings.
    fn write_provider_list(&mut self, providers: &[ProviderId]) -> Result<()> {
        let mut lines = Vec::with_capacity(providers.len());
        for (index, &id) in providers.iter().enumerate() {
            let provider = self
                .market
                .provider(id)
                .context("provider disappeared from the registry")?;
            let rating = if provider.ratings().is_empty() {
                " - No ratings yet".to_string()
            } else {
                format!(" - Rating: {:.1}", provider.average_rating())
            };
            lines.push(format!(
                "{}. {} (Hourly Rate: {}{:.2}){}",
                index + 1,
                provider.name(),
                self.config.currency,
                provider.hourly_rate(),
                rating
            ));
        }
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Print a freshly registered provider's profile.
    fn write_provider_profile(&mut self, id: ProviderId) -> Result<()> {
        let provider = self
            .market
            .provider(id)
            .context("provider disappeared from the registry")?;
        let mut text = format!(
            "Service Provider Profile:\nName: {}\nContact: {}\nHourly Rate: {}{:.2}\nServices offered:",
            provider.name(),
            provider.contact(),
            self.config.currency,
            provider.hourly_rate()
        );
        for service in provider.services() {
            text.push('\n');
            text.push_str(&service.to_string());
        }
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
