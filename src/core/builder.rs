//! Builds the step list for a set of workspaces

use crate::core::{
    params::Parameters,
    pipeline::Pipeline,
    step::Step,
    template,
};
use tracing::debug;

/// ID of the leading announce step
pub const ANNOUNCE_STEP_ID: &str = "branch name";

pub fn plan_step_id(workspace: &str) -> String {
    format!("setup and plan {workspace}")
}

pub fn apply_step_id(workspace: &str) -> String {
    format!("apply {workspace}")
}

pub fn destroy_step_id(workspace: &str) -> String {
    format!("destroy {workspace}")
}

/// Build the pipeline: one announce step, then plan, apply and destroy
/// for every workspace in list order.
pub fn build_pipeline(params: &Parameters) -> Pipeline {
    let mut steps = Vec::with_capacity(1 + 3 * params.workspaces.len());

    steps.push(Step::shell(
        ANNOUNCE_STEP_ID,
        template::ANNOUNCE_IMAGE,
        template::ANNOUNCE_ENTRYPOINT,
        template::announce_script(&params.pr_number),
    ));

    let image = template::terraform_image(&params.tf_version);
    for workspace in &params.workspaces {
        debug!("Adding steps for workspace {:?}", workspace);
        steps.extend(workspace_steps(workspace, &image, &params.pr_number));
    }

    Pipeline { steps }
}

fn workspace_steps(workspace: &str, image: &str, pr_number: &str) -> [Step; 3] {
    let plan_id = plan_step_id(workspace);
    [
        Step::shell(
            plan_id.clone(),
            image,
            template::TERRAFORM_ENTRYPOINT,
            template::plan_script(workspace, pr_number),
        ),
        Step::shell(
            apply_step_id(workspace),
            image,
            template::TERRAFORM_ENTRYPOINT,
            template::apply_script(workspace),
        )
        .wait_for(plan_id),
        Step::shell(
            destroy_step_id(workspace),
            image,
            template::TERRAFORM_ENTRYPOINT,
            template::destroy_script(workspace),
        ),
    ]
}
