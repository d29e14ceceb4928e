//! Shell script templates for generated steps
//!
//! Each template is a function so that `format!` checks its parameter list
//! at compile time. Variables written as `$NAME` are left for the build
//! environment to expand.

/// Image used by the announce step
pub const ANNOUNCE_IMAGE: &str = "ubuntu";
/// Interpreter used by the announce step
pub const ANNOUNCE_ENTRYPOINT: &str = "bash";
/// Interpreter used by the terraform steps
pub const TERRAFORM_ENTRYPOINT: &str = "sh";
/// Seconds the generated lock-retry loop sleeps between attempts
pub const LOCK_RETRY_SECS: u64 = 10;

const TF_VARS: &str = concat!(
    r#"-var="compute_engine_service_account=terraform@$PROJECT_ID.iam.gserviceaccount.com""#,
    r#" -var="project_id=$PROJECT_ID""#,
);

/// Image for the terraform steps
pub fn terraform_image(tf_version: &str) -> String {
    format!("hashicorp/terraform:{tf_version}")
}

/// Path of the plan artifact shared between plan and apply
pub fn plan_path(workspace: &str) -> String {
    format!("/workspace/$BUILD_ID/tfplan_{workspace}")
}

/// Informational banner for the first step
pub fn announce_script(pr_number: &str) -> String {
    format!(
        concat!(
            r#"echo "************************"; "#,
            r#"echo "Branch Name: $BRANCH_NAME"; "#,
            r#"echo "Pull Request: {pr_number}"; "#,
            r#"echo "************************""#,
        ),
        pr_number = pr_number
    )
}

/// Init, then create or select `workspace`, polling while its state is locked
pub fn select_workspace_script(workspace: &str) -> String {
    format!(
        r#"terraform init -reconfigure

# Create workspace if it doesn't exist
terraform workspace new {workspace} || terraform workspace select {workspace}

# Wait for state lock
while ! terraform workspace select {workspace}; do
    echo "Workspace {workspace} is locked. Waiting for {secs} seconds..."
    sleep {secs}
done"#,
        workspace = workspace,
        secs = LOCK_RETRY_SECS
    )
}

/// Plan step: runs on main/master or any pull request build
pub fn plan_script(workspace: &str, pr_number: &str) -> String {
    format!(
        r#"
echo "Branch Name inside setup and plan step: $BRANCH_NAME"
if [ "$BRANCH_NAME" = "main" ] || [ "$BRANCH_NAME" = "master" ] || [ -n "{pr_number}" ]; then
    echo "Processing workspace: {workspace}"
    mkdir -p /workspace/$BUILD_ID
{select}
    terraform validate
    terraform plan {vars} -out={plan}
else
    echo "Skipping setup and plan on branch $BRANCH_NAME"
fi
"#,
        pr_number = pr_number,
        workspace = workspace,
        select = indent(&select_workspace_script(workspace)),
        vars = TF_VARS,
        plan = plan_path(workspace)
    )
}

/// Apply step: runs on main/master only
pub fn apply_script(workspace: &str) -> String {
    format!(
        r#"
echo "Branch Name inside apply step: $BRANCH_NAME"
if [ "$BRANCH_NAME" = "main" ] || [ "$BRANCH_NAME" = "master" ]; then
    echo "Applying Terraform plan for workspace: {workspace}"
{select}
    terraform apply -auto-approve {plan}
else
    echo "Skipping apply on branch $BRANCH_NAME"
fi
"#,
        workspace = workspace,
        select = indent(&select_workspace_script(workspace)),
        plan = plan_path(workspace)
    )
}

/// Destroy step: runs on the destroy-all branch only
pub fn destroy_script(workspace: &str) -> String {
    format!(
        r#"
echo "Branch Name inside destroy step: $BRANCH_NAME"
if [ "$BRANCH_NAME" = "destroy-all" ]; then
    echo "Preparing to destroy all resources..."
    echo "Auto-confirming destruction"
    echo "Destroying resources in workspace: {workspace}"
{select}
    terraform destroy -auto-approve {vars}
else
    echo "Destroy operation not allowed on this branch."
fi
"#,
        workspace = workspace,
        select = indent(&select_workspace_script(workspace)),
        vars = TF_VARS
    )
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_contains_pr_number() {
        let script = announce_script("42");
        assert!(script.contains("Pull Request: 42"));
        assert!(script.contains("$BRANCH_NAME"));
    }

    #[test]
    fn test_select_workspace_polls_until_unlocked() {
        let script = select_workspace_script("dev");
        assert!(script.contains("terraform workspace new dev || terraform workspace select dev"));
        assert!(script.contains("while ! terraform workspace select dev; do"));
        assert!(script.contains("sleep 10"));
    }

    #[test]
    fn test_plan_guard_includes_pr_number() {
        let script = plan_script("dev", "7");
        assert!(script.contains(r#"[ -n "7" ]"#));
        assert!(script.contains("terraform validate"));
        assert!(script.contains("-out=/workspace/$BUILD_ID/tfplan_dev"));
    }

    #[test]
    fn test_apply_uses_plan_artifact() {
        let script = apply_script("staging");
        assert!(script.contains("terraform apply -auto-approve /workspace/$BUILD_ID/tfplan_staging"));
        assert!(!script.contains("-n \""));
    }

    #[test]
    fn test_destroy_guarded_by_destroy_all() {
        let script = destroy_script("gitops");
        assert!(script.contains(r#"[ "$BRANCH_NAME" = "destroy-all" ]"#));
        assert!(script.contains("terraform destroy -auto-approve"));
        assert!(script.contains("project_id=$PROJECT_ID"));
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb"), "    a\n\n    b");
    }
}
