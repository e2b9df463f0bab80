use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use temper::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "temper-demo-basic", about = "Renders the sample site stylesheet")]
struct Cli {
    /// Output configuration file, `.temper.toml` when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the stylesheet instead of writing it
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let sheet = site_stylesheet();
    if cli.stdout {
        print!("{}", sheet.try_render()?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => TemperConfig::from_file(path)?,
        None => TemperConfig::load()?,
    };
    let path = write_stylesheet(&sheet, &config.output)?;
    tracing::info!("rendered {}", path.display());
    Ok(())
}

fn site_stylesheet() -> Container {
    stylesheet(|sheet| {
        sheet.body().apply(|body| {
            body.margin().set("0");
            body.font().family().set("system-ui, sans-serif");
            body.background().color().set("var(--neutral-950)");
        });

        sheet.header().apply(|header| {
            header.display().set("flex").height().set("4rem");
            header.padding().set("0 1rem");
            header.gradient_vertical("#1f2937", "#111827");

            header.immediate().nav().apply(|nav| {
                nav.round_border("0.1rem", "var(--neutral-300)", "0.25rem");
                nav.cursor().set("pointer");
                nav.select("hover").color().set("var(--neutral-100)");
            });

            header.media("max-width: 640px").apply(|narrow| {
                narrow.height().set("3rem");
                narrow.nested().nav().display().set("none");
            });
        });

        sheet.a().apply(|a| {
            a.text().decoration().set("none");
            a.attribute_value("href", "https", AttributeOperation::StartsWith)
                .property("padding-right", "1rem");
            a.not().class("button").select("hover").text().decoration().line().set("underline");
        });

        sheet.class("card").apply(|card| {
            card.shadow(&[outset("rgba(0, 0, 0, 0.2)", ShadowOffset::default()).as_str()]);
            card.next().class("card").margin().top().set("1rem");
        });

        sheet.footer().or().class("page-footer").apply(|footer| {
            footer.display().set("flex");
            footer.height().set("3rem");
        });
    })
}
