use clap::Parser;
use mimus::adapters::collection_loader::CollectionLoader;
use mimus::adapters::folder_tree::FolderTreeBuilder;
use mimus::adapters::mock_generator::MockPayloadGenerator;
use mimus::adapters::spec_source::FileSpecSource;
use mimus::adapters::testcase_assembler;
use mimus::cli::{Cli, Command, MockTarget};
use mimus::config::Settings;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    match cli.command {
        Command::Mock {
            spec,
            route,
            method,
            target,
        } => {
            let source = FileSpecSource::new(spec);
            let generator =
                MockPayloadGenerator::from_source(&source, settings.generator_options()).await?;
            let payload = match target {
                MockTarget::RequestBody => {
                    generator.generate_request_body(&route, &method, &[]).await
                }
                MockTarget::ResponseBody => {
                    generator.generate_response_body(&route, &method, &[]).await
                }
                MockTarget::Headers => {
                    generator.generate_request_headers(&route, &method, &[]).await
                }
                MockTarget::QueryParams => {
                    generator
                        .generate_request_query_params(&route, &method, &[])
                        .await
                }
                MockTarget::PathParams => {
                    generator
                        .generate_request_path_params(&route, &method, &[])
                        .await
                }
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Suite { dir, select } => {
            let records = CollectionLoader::new(dir).load()?;
            info!("Loaded {} collection files", records.len());

            let builder = FolderTreeBuilder::new(&settings.collection.master_file_name);
            let tree = builder.build_tree(records);

            let selected = if select.is_empty() {
                None
            } else {
                Some(select.as_slice())
            };
            let assembly = testcase_assembler::assemble(&tree, selected);
            for diagnostic in &assembly.diagnostics {
                warn!("{}", diagnostic);
            }
            println!("{}", serde_json::to_string_pretty(&assembly.test_cases)?);
        }
    }

    Ok(())
}
