// Concept resolution — turning a user-typed name into a document.
//
// The resolver trait keeps the relation core independent of where documents
// come from. The interactive loop lives here too: it keeps asking for a name
// until one resolves, showing the alternatives when a name is ambiguous.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::document::Document;
use crate::error::ResolveError;
use crate::output::terminal;
use crate::relation::discover::Concept;

/// Default number of names a user may try per concept.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Trait for looking up the reference document for a concept name.
#[async_trait]
pub trait ConceptResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Document, ResolveError>;
}

/// Resolve concept number `index`, prompting on `input` until a name resolves.
///
/// `initial` is tried first without prompting (e.g. a name given on the
/// command line). Ambiguous and unknown names are reported on `output` and
/// the user is asked again, up to `max_attempts` names in total. Transport
/// failures end the loop immediately.
pub async fn prompt_concept<R, W>(
    resolver: &dyn ConceptResolver,
    index: usize,
    initial: Option<&str>,
    input: &mut R,
    output: &mut W,
    max_attempts: u32,
) -> Result<Concept>
where
    R: BufRead,
    W: Write,
{
    let mut pending = initial.map(str::to_string);

    for attempt in 1..=max_attempts.max(1) {
        let name = match pending.take() {
            Some(name) => name,
            None => read_name(index, input, output)?,
        };

        if name.is_empty() {
            writeln!(output, "Please enter a concept name.")?;
            continue;
        }

        match resolver.resolve(&name).await {
            Ok(document) => {
                info!(concept = %name, title = %document.title, sections = document.sections().len(), "Resolved concept");
                return Ok(Concept::new(&name, document));
            }
            Err(ResolveError::Ambiguous { name, options }) => {
                warn!(concept = %name, options = options.len(), attempt, "Ambiguous concept");
                terminal::write_disambiguation(output, &name, &options)?;
            }
            Err(ResolveError::NotFound(name)) => {
                warn!(concept = %name, attempt, "Concept not found");
                terminal::write_not_found(output, &name)?;
            }
            Err(ResolveError::Transport(e)) => {
                return Err(e.context(format!("Failed to resolve concept \"{name}\"")));
            }
        }
    }

    anyhow::bail!("No valid concept {index} after {} attempts", max_attempts.max(1))
}

fn read_name<R: BufRead, W: Write>(index: usize, input: &mut R, output: &mut W) -> Result<String> {
    terminal::write_concept_prompt(output, index)?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read concept name")?;
    if read == 0 {
        anyhow::bail!("Input closed before concept {index} was entered");
    }

    Ok(line.trim().to_string())
}
