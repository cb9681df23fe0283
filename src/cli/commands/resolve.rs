use std::env;

use anyhow::{Context, Result};

use super::super::args::ResolveCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{MetadataView, print_metadata, report};
use crate::{
    analysis::ResolvedElement,
    core::{
        MetadataResolver, PropertyInfo, ResolutionContext, ResolveError, TypeRef,
        find_bound_constructor,
    },
    issues::Issue,
    manifest::{TypeCatalog, TypeInfo, Workspace, parameter_context, property_context, type_context},
};

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let start_dir = env::current_dir().context("Failed to read current directory")?;
    let workspace = Workspace::load(
        &start_dir,
        cmd.common.source_root.as_deref(),
        cmd.common.verbose,
    )?;
    let catalog = &workspace.catalog;

    let ty = TypeRef::new(cmd.type_name.as_str());
    let info = catalog.get(&ty).with_context(|| {
        format!(
            "Type '{}' is not declared in any manifest under {}",
            ty,
            workspace.root.display()
        )
    })?;

    let mut context = match target_context(catalog, info, &cmd)? {
        Ok(context) => context,
        Err(error) => return Ok(report_failure(catalog, type_context(info), error)),
    };
    let resolver = MetadataResolver::new(catalog);

    if let Err(error) = resolver.resolve(Some(&mut context)) {
        return Ok(report_failure(catalog, context, error));
    }

    let properties: &[PropertyInfo] = if cmd.property.is_none() && cmd.parameter.is_none() {
        info.properties.as_slice()
    } else {
        &[]
    };
    print_metadata(&MetadataView::new(&context, properties), cmd.format)?;

    Ok(ExitStatus::Success)
}

/// Context for the element selected on the command line.
///
/// The inner error is a resolution failure of the owning type, reported as an
/// issue rather than aborting the command.
fn target_context(
    catalog: &TypeCatalog,
    info: &TypeInfo,
    cmd: &ResolveCommand,
) -> Result<Result<ResolutionContext, ResolveError>> {
    if let Some(name) = &cmd.property {
        let property = info
            .property(name)
            .with_context(|| format!("Type '{}' has no property '{}'", info.name, name))?;
        return Ok(Ok(property_context(catalog, &info.name, property)));
    }

    if let Some(name) = &cmd.parameter {
        let constructor = match find_bound_constructor(&info.name, catalog) {
            Ok(constructor) => constructor,
            Err(error) => return Ok(Err(error)),
        };
        let constructor = constructor
            .with_context(|| format!("Type '{}' has no bound constructor", info.name))?;
        let parameter = constructor
            .parameters
            .iter()
            .find(|p| p.name == *name)
            .with_context(|| {
                format!(
                    "Bound constructor {} has no parameter '{}'",
                    constructor.signature(&info.name),
                    name
                )
            })?;
        return Ok(Ok(parameter_context(catalog, parameter)));
    }

    Ok(Ok(type_context(info)))
}

fn report_failure(
    catalog: &TypeCatalog,
    context: ResolutionContext,
    error: ResolveError,
) -> ExitStatus {
    let owner = context
        .key
        .container_type
        .as_ref()
        .unwrap_or(&context.key.model_type);
    let element = ResolvedElement {
        path: catalog.source_path(owner).unwrap_or_default().to_string(),
        outcome: Err(error.clone()),
        context,
    };
    report(&[Issue::ambiguous_constructor(&element, &error)]);
    ExitStatus::Failure
}
