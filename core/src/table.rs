//! The Asana endpoint table.
//!
//! Every supported operation is one row. Rows are grouped by resource in the
//! order of Asana's API reference.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::endpoint::EndpointDescriptor as E;

/// Accepted by every endpoint that returns a single resource.
const ONE: &[&str] = &["opt_fields", "opt_pretty"];
/// Accepted by every paginated collection endpoint.
const PAGE: &[&str] = &["limit", "offset", "opt_fields", "opt_pretty"];
/// Endpoints whose response carries no resource fields.
const PRETTY: &[&str] = &["opt_pretty"];

const SEARCH_TASKS: &[&str] = &[
    "text",
    "resource_subtype",
    "assignee.any",
    "assignee.not",
    "portfolios.any",
    "projects.any",
    "projects.not",
    "projects.all",
    "sections.any",
    "sections.not",
    "sections.all",
    "tags.any",
    "tags.not",
    "tags.all",
    "teams.any",
    "followers.not",
    "created_by.any",
    "created_by.not",
    "assigned_by.any",
    "assigned_by.not",
    "liked_by.not",
    "commented_on_by.not",
    "due_on.before",
    "due_on.after",
    "due_on",
    "due_at.before",
    "due_at.after",
    "start_on.before",
    "start_on.after",
    "start_on",
    "created_on.before",
    "created_on.after",
    "created_on",
    "created_at.before",
    "created_at.after",
    "completed_on.before",
    "completed_on.after",
    "completed_on",
    "completed_at.before",
    "completed_at.after",
    "modified_on.before",
    "modified_on.after",
    "modified_on",
    "modified_at.before",
    "modified_at.after",
    "is_blocking",
    "is_blocked",
    "has_attachment",
    "completed",
    "is_subtask",
    "sort_by",
    "sort_ascending",
    "opt_fields",
    "opt_pretty",
];

pub static ENDPOINTS: &[E] = &[
    // Attachments
    E::get("get_an_attachment", "/attachments/{attachment_gid}", ONE, "Get an attachment"),
    E::delete("delete_an_attachment", "/attachments/{attachment_gid}", PRETTY, "Delete an attachment"),
    E::get(
        "get_attachments_from_an_object",
        "/attachments",
        &["parent", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get attachments from an object",
    ),
    // Audit log
    E::get(
        "get_audit_log_events",
        "/workspaces/{workspace_gid}/audit_log_events",
        &[
            "start_at",
            "end_at",
            "event_type",
            "actor_type",
            "actor_gid",
            "resource_gid",
            "limit",
            "offset",
        ],
        "Get audit log events",
    ),
    // Batch
    E::post("submit_parallel_requests", "/batch", ONE, "Submit parallel requests"),
    // Custom field settings
    E::get(
        "get_a_project_s_custom_fields",
        "/projects/{project_gid}/custom_field_settings",
        PAGE,
        "Get a project's custom fields",
    ),
    E::get(
        "get_a_portfolio_s_custom_fields",
        "/portfolios/{portfolio_gid}/custom_field_settings",
        PAGE,
        "Get a portfolio's custom fields",
    ),
    // Custom fields
    E::post("create_a_custom_field", "/custom_fields", ONE, "Create a custom field"),
    E::get("get_a_custom_field", "/custom_fields/{custom_field_gid}", ONE, "Get a custom field"),
    E::put("update_a_custom_field", "/custom_fields/{custom_field_gid}", ONE, "Update a custom field"),
    E::delete("delete_a_custom_field", "/custom_fields/{custom_field_gid}", PRETTY, "Delete a custom field"),
    E::get(
        "get_a_workspace_s_custom_fields",
        "/workspaces/{workspace_gid}/custom_fields",
        PAGE,
        "Get a workspace's custom fields",
    ),
    E::post(
        "create_an_enum_option",
        "/custom_fields/{custom_field_gid}/enum_options",
        ONE,
        "Create an enum option",
    ),
    E::post(
        "reorder_a_custom_field_s_enum",
        "/custom_fields/{custom_field_gid}/enum_options/insert",
        ONE,
        "Reorder a custom field's enum",
    ),
    E::put("update_an_enum_option", "/enum_options/{enum_option_gid}", ONE, "Update an enum option"),
    // Events
    E::get(
        "get_events_on_a_resource",
        "/events",
        &["resource", "sync", "opt_fields", "opt_pretty"],
        "Get events on a resource",
    ),
    // Goal relationships
    E::get(
        "get_a_goal_relationship",
        "/goal_relationships/{goal_relationship_gid}",
        ONE,
        "Get a goal relationship",
    ),
    E::put(
        "update_a_goal_relationship",
        "/goal_relationships/{goal_relationship_gid}",
        ONE,
        "Update a goal relationship",
    ),
    E::get(
        "get_goal_relationships",
        "/goal_relationships",
        &["supported_goal", "resource_subtype", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get goal relationships",
    ),
    E::post(
        "add_a_supporting_goal_relationship",
        "/goals/{goal_gid}/addSupportingRelationship",
        ONE,
        "Add a supporting goal relationship",
    ),
    E::post(
        "removes_a_supporting_goal_relationship",
        "/goals/{goal_gid}/removeSupportingRelationship",
        PRETTY,
        "Removes a supporting goal relationship",
    ),
    // Goals
    E::get("get_a_goal", "/goals/{goal_gid}", ONE, "Get a goal"),
    E::put("update_a_goal", "/goals/{goal_gid}", ONE, "Update a goal"),
    E::delete("delete_a_goal", "/goals/{goal_gid}", PRETTY, "Delete a goal"),
    E::get(
        "get_goals",
        "/goals",
        &[
            "portfolio",
            "project",
            "is_workspace_level",
            "team",
            "workspace",
            "time_periods",
            "limit",
            "offset",
            "opt_fields",
            "opt_pretty",
        ],
        "Get goals",
    ),
    E::post("create_a_goal", "/goals", ONE, "Create a goal"),
    E::post("create_a_goal_metric", "/goals/{goal_gid}/setMetric", ONE, "Create a goal metric"),
    E::post(
        "update_a_goal_metric",
        "/goals/{goal_gid}/setMetricCurrentValue",
        ONE,
        "Update a goal metric",
    ),
    E::post(
        "add_a_collaborator_to_a_goal",
        "/goals/{goal_gid}/addFollowers",
        ONE,
        "Add a collaborator to a goal",
    ),
    E::post(
        "remove_a_collaborator_from_a_goal",
        "/goals/{goal_gid}/removeFollowers",
        ONE,
        "Remove a collaborator from a goal",
    ),
    E::get(
        "get_parent_goals_for_a_goal",
        "/goals/{goal_gid}/parentGoals",
        ONE,
        "Get parent goals from a goal",
    ),
    // Jobs
    E::get("get_a_job_by_id", "/jobs/{job_gid}", ONE, "Get a job by id"),
    // Memberships
    E::get(
        "get_multiple_memberships",
        "/memberships",
        &["parent", "member", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple memberships",
    ),
    E::post("create_a_membership", "/memberships", PRETTY, "Create a membership"),
    E::get("get_a_membership", "/memberships/{membership_gid}", ONE, "Get a membership"),
    E::put("update_a_membership", "/memberships/{membership_gid}", PRETTY, "Update a membership"),
    E::delete("delete_a_membership", "/memberships/{membership_gid}", PRETTY, "Delete a membership"),
    // Organization exports
    E::post(
        "create_an_organization_export_request",
        "/organization_exports",
        ONE,
        "Create an organization export request",
    ),
    E::get(
        "get_details_on_an_org_export_request",
        "/organization_exports/{organization_export_gid}",
        ONE,
        "Get details on an org export request",
    ),
    // Portfolio memberships
    E::get(
        "get_multiple_portfolio_memberships",
        "/portfolio_memberships",
        &["portfolio", "workspace", "user", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple portfolio memberships",
    ),
    E::get(
        "get_a_portfolio_membership",
        "/portfolio_memberships/{portfolio_membership_gid}",
        ONE,
        "Get a portfolio membership",
    ),
    E::get(
        "get_memberships_from_a_portfolio",
        "/portfolios/{portfolio_gid}/portfolio_memberships",
        &["user", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get memberships from a portfolio",
    ),
    // Portfolios
    E::get(
        "get_multiple_portfolios",
        "/portfolios",
        &["workspace", "owner", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple portfolios",
    ),
    E::post("create_a_portfolio", "/portfolios", ONE, "Create a portfolio"),
    E::get("get_a_portfolio", "/portfolios/{portfolio_gid}", ONE, "Get a portfolio"),
    E::put("update_a_portfolio", "/portfolios/{portfolio_gid}", ONE, "Update a portfolio"),
    E::delete("delete_a_portfolio", "/portfolios/{portfolio_gid}", PRETTY, "Delete a portfolio"),
    E::get(
        "get_portfolio_items",
        "/portfolios/{portfolio_gid}/items",
        PAGE,
        "Get portfolio items",
    ),
    E::post(
        "add_a_portfolio_item",
        "/portfolios/{portfolio_gid}/addItem",
        PRETTY,
        "Add a portfolio item",
    ),
    E::post(
        "remove_a_portfolio_item",
        "/portfolios/{portfolio_gid}/removeItem",
        PRETTY,
        "Remove a portfolio item",
    ),
    E::post(
        "add_a_custom_field_to_a_portfolio",
        "/portfolios/{portfolio_gid}/addCustomFieldSetting",
        PRETTY,
        "Add a custom field to a portfolio",
    ),
    E::post(
        "remove_a_custom_field_from_a_portfolio",
        "/portfolios/{portfolio_gid}/removeCustomFieldSetting",
        PRETTY,
        "Remove a custom field from a portfolio",
    ),
    E::post(
        "add_users_to_a_portfolio",
        "/portfolios/{portfolio_gid}/addMembers",
        ONE,
        "Add users to a portfolio",
    ),
    E::post(
        "remove_users_from_a_portfolio",
        "/portfolios/{portfolio_gid}/removeMembers",
        ONE,
        "Remove users from a portfolio",
    ),
    // Project briefs
    E::get(
        "get_a_project_brief",
        "/project_briefs/{project_brief_gid}",
        ONE,
        "Get a project brief",
    ),
    E::put(
        "update_a_project_brief",
        "/project_briefs/{project_brief_gid}",
        ONE,
        "Update a project brief",
    ),
    E::delete(
        "delete_a_project_brief",
        "/project_briefs/{project_brief_gid}",
        PRETTY,
        "Delete a project brief",
    ),
    E::post(
        "create_a_project_brief",
        "/projects/{project_gid}/project_briefs",
        ONE,
        "Create a project brief",
    ),
    // Project memberships
    E::get(
        "get_a_project_membership",
        "/project_memberships/{project_membership_gid}",
        ONE,
        "Get a project membership",
    ),
    E::get(
        "get_memberships_from_a_project",
        "/projects/{project_gid}/project_memberships",
        &["user", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get memberships from a project",
    ),
    // Project statuses
    E::get(
        "get_a_project_status",
        "/project_statuses/{project_status_gid}",
        ONE,
        "Get a project status",
    ),
    E::delete(
        "delete_a_project_status",
        "/project_statuses/{project_status_gid}",
        PRETTY,
        "Delete a project status",
    ),
    E::get(
        "get_statuses_from_a_project",
        "/projects/{project_gid}/project_statuses",
        PAGE,
        "Get statuses from a project",
    ),
    E::post(
        "create_a_project_status",
        "/projects/{project_gid}/project_statuses",
        ONE,
        "Create a project status",
    ),
    // Project templates
    E::get(
        "get_a_project_template",
        "/project_templates/{project_template_gid}",
        ONE,
        "Get a project template",
    ),
    E::delete(
        "delete_a_project_template",
        "/project_templates/{project_template_gid}",
        PRETTY,
        "Delete a project template",
    ),
    E::get(
        "get_multiple_project_templates",
        "/project_templates",
        &["workspace", "team", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple project templates",
    ),
    E::get(
        "get_a_team_s_project_templates",
        "/teams/{team_gid}/project_templates",
        PAGE,
        "Get a team's project templates",
    ),
    E::post(
        "instantiate_a_project_from_a_project_template",
        "/project_templates/{project_template_gid}/instantiateProject",
        ONE,
        "Instantiate a project from a project template",
    ),
    // Projects
    E::get(
        "get_multiple_projects",
        "/projects",
        &["workspace", "team", "archived", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple projects",
    ),
    E::post("create_a_project", "/projects", ONE, "Create a project"),
    E::get("get_a_project", "/projects/{project_gid}", ONE, "Get a project"),
    E::put("update_a_project", "/projects/{project_gid}", ONE, "Update a project"),
    E::delete("delete_a_project", "/projects/{project_gid}", PRETTY, "Delete a project"),
    E::post(
        "duplicate_a_project",
        "/projects/{project_gid}/duplicate",
        ONE,
        "Duplicate a project",
    ),
    E::get(
        "get_projects_a_task_is_in",
        "/tasks/{task_gid}/projects",
        PAGE,
        "Get projects a task is in",
    ),
    E::get(
        "get_a_team_s_projects",
        "/teams/{team_gid}/projects",
        &["archived", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get a team's projects",
    ),
    E::post(
        "create_a_project_in_a_team",
        "/teams/{team_gid}/projects",
        ONE,
        "Create a project in a team",
    ),
    E::get(
        "get_all_projects_in_a_workspace",
        "/workspaces/{workspace_gid}/projects",
        &["archived", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get all projects in a workspace",
    ),
    E::post(
        "create_a_project_in_a_workspace",
        "/workspaces/{workspace_gid}/projects",
        ONE,
        "Create a project in a workspace",
    ),
    E::post(
        "add_a_custom_field_to_a_project",
        "/projects/{project_gid}/addCustomFieldSetting",
        ONE,
        "Add a custom field to a project",
    ),
    E::post(
        "remove_a_custom_field_from_a_project",
        "/projects/{project_gid}/removeCustomFieldSetting",
        PRETTY,
        "Remove a custom field from a project",
    ),
    E::get(
        "get_task_count_of_a_project",
        "/projects/{project_gid}/task_counts",
        ONE,
        "Get task count of a project",
    ),
    E::post(
        "add_users_to_a_project",
        "/projects/{project_gid}/addMembers",
        ONE,
        "Add users to a project",
    ),
    E::post(
        "remove_users_from_a_project",
        "/projects/{project_gid}/removeMembers",
        ONE,
        "Remove users from a project",
    ),
    E::post(
        "add_followers_to_a_project",
        "/projects/{project_gid}/addFollowers",
        ONE,
        "Add followers to a project",
    ),
    E::post(
        "remove_followers_from_a_project",
        "/projects/{project_gid}/removeFollowers",
        ONE,
        "Remove followers from a project",
    ),
    E::post(
        "create_a_project_template_from_a_project",
        "/projects/{project_gid}/saveAsTemplate",
        ONE,
        "Create a project template from a project",
    ),
    // Rules
    E::post("trigger_a_rule", "/rules/{rule_trigger_gid}/run", PRETTY, "Trigger a rule"),
    // Sections
    E::get("get_a_section", "/sections/{section_gid}", ONE, "Get a section"),
    E::put("update_a_section", "/sections/{section_gid}", ONE, "Update a section"),
    E::delete("delete_a_section", "/sections/{section_gid}", PRETTY, "Delete a section"),
    E::get(
        "get_sections_in_a_project",
        "/projects/{project_gid}/sections",
        PAGE,
        "Get sections in a project",
    ),
    E::post(
        "create_a_section_in_a_project",
        "/projects/{project_gid}/sections",
        ONE,
        "Create a section in a project",
    ),
    E::post(
        "add_task_to_section",
        "/sections/{section_gid}/addTask",
        PRETTY,
        "Add task to section",
    ),
    E::post(
        "move_or_insert_sections",
        "/projects/{project_gid}/sections/insert",
        PRETTY,
        "Move or Insert sections",
    ),
    // Status updates
    E::get(
        "get_a_status_update",
        "/status_updates/{status_update_gid}",
        ONE,
        "Get a status update",
    ),
    E::delete(
        "delete_a_status_update",
        "/status_updates/{status_update_gid}",
        PRETTY,
        "Delete a status update",
    ),
    E::get(
        "get_status_updates_from_an_object",
        "/status_updates",
        &["parent", "created_since", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get status updates from an object",
    ),
    E::post(
        "create_a_status_update",
        "/status_updates",
        &["limit", "offset", "opt_fields", "opt_pretty"],
        "Create a status update",
    ),
    // Stories
    E::get("get_a_story", "/stories/{story_gid}", ONE, "Get a story"),
    E::put("update_a_story", "/stories/{story_gid}", ONE, "Update a story"),
    E::delete("delete_a_story", "/stories/{story_gid}", PRETTY, "Delete a story"),
    E::get(
        "get_stories_from_a_task",
        "/tasks/{task_gid}/stories",
        PAGE,
        "Get stories from a task",
    ),
    E::post(
        "create_a_story_on_a_task",
        "/tasks/{task_gid}/stories",
        ONE,
        "Create a story on a task",
    ),
    // Tags
    E::get(
        "get_multiple_tags",
        "/tags",
        &["workspace", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple tags",
    ),
    E::post("create_a_tag", "/tags", ONE, "Create a tag"),
    E::get("get_a_tag", "/tags/{tag_gid}", ONE, "Get a tag"),
    E::put("update_a_tag", "/tags/{tag_gid}", ONE, "Update a tag"),
    E::delete("delete_a_tag", "/tags/{tag_gid}", PRETTY, "Delete a tag"),
    E::get("get_a_task_s_tags", "/tasks/{task_gid}/tags", PAGE, "Get a task's tags"),
    E::get(
        "get_tags_in_a_workspace",
        "/workspaces/{workspace_gid}/tags",
        PAGE,
        "Get tags in a workspace",
    ),
    E::post(
        "create_a_tag_in_a_workspace",
        "/workspaces/{workspace_gid}/tags",
        ONE,
        "Create a tag in a workspace",
    ),
    // Task templates
    E::get(
        "get_multiple_task_templates",
        "/task_templates",
        &["project", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple task templates",
    ),
    E::get(
        "get_a_task_template",
        "/task_templates/{task_template_gid}",
        ONE,
        "Get a task template",
    ),
    E::delete(
        "delete_a_task_template",
        "/task_templates/{task_template_gid}",
        PRETTY,
        "Delete a task template",
    ),
    E::post(
        "instantiate_a_task_from_a_task_template",
        "/task_templates/{task_template_gid}/instantiateTask",
        ONE,
        "Instantiate a task from a task template",
    ),
    // Tasks
    E::get(
        "get_multiple_tasks",
        "/tasks",
        &[
            "assignee",
            "project",
            "section",
            "workspace",
            "completed_since",
            "modified_since",
            "limit",
            "offset",
            "opt_fields",
            "opt_pretty",
        ],
        "Get multiple tasks",
    ),
    E::post("create_a_task", "/tasks", ONE, "Create a task"),
    E::get("get_a_task", "/tasks/{task_gid}", ONE, "Get a task"),
    E::put("update_a_task", "/tasks/{task_gid}", ONE, "Update a task"),
    E::delete("delete_a_task", "/tasks/{task_gid}", PRETTY, "Delete a task"),
    E::post("duplicate_a_task", "/tasks/{task_gid}/duplicate", ONE, "Duplicate a task"),
    E::get(
        "get_tasks_from_a_project",
        "/projects/{project_gid}/tasks",
        &["completed_since", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get tasks from a project",
    ),
    E::get(
        "get_tasks_from_a_section",
        "/sections/{section_gid}/tasks",
        &["completed_since", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get tasks from a section",
    ),
    E::get("get_tasks_from_a_tag", "/tags/{tag_gid}/tasks", PAGE, "Get tasks from a tag"),
    E::get(
        "get_tasks_from_a_user_task_list",
        "/user_task_lists/{user_task_list_gid}/tasks",
        &["completed_since", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get tasks from a user task list",
    ),
    E::get(
        "get_subtasks_from_a_task",
        "/tasks/{task_gid}/subtasks",
        PAGE,
        "Get subtasks from a task",
    ),
    E::post(
        "create_a_subtask",
        "/tasks/{task_gid}/subtasks",
        ONE,
        "Create a subtask",
    ),
    E::post(
        "set_the_parent_of_a_task",
        "/tasks/{task_gid}/setParent",
        ONE,
        "Set the parent of a task",
    ),
    E::get(
        "get_dependencies_from_a_task",
        "/tasks/{task_gid}/dependencies",
        PAGE,
        "Get dependencies from a task",
    ),
    E::post(
        "set_dependencies_for_a_task",
        "/tasks/{task_gid}/addDependencies",
        PRETTY,
        "Set dependencies for a task",
    ),
    E::post(
        "unlink_dependencies_from_a_task",
        "/tasks/{task_gid}/removeDependencies",
        PRETTY,
        "Unlink dependencies from a task",
    ),
    E::get(
        "get_dependents_from_a_task",
        "/tasks/{task_gid}/dependents",
        PAGE,
        "Get dependents from a task",
    ),
    E::post(
        "set_dependents_for_a_task",
        "/tasks/{task_gid}/addDependents",
        PRETTY,
        "Set dependents for a task",
    ),
    E::post(
        "unlink_dependents_from_a_task",
        "/tasks/{task_gid}/removeDependents",
        PRETTY,
        "Unlink dependents from a task",
    ),
    E::post(
        "add_a_project_to_a_task",
        "/tasks/{task_gid}/addProject",
        PRETTY,
        "Add a project to a task",
    ),
    E::post(
        "remove_a_project_from_a_task",
        "/tasks/{task_gid}/removeProject",
        PRETTY,
        "Remove a project from a task",
    ),
    E::post("add_a_tag_to_a_task", "/tasks/{task_gid}/addTag", PRETTY, "Add a tag to a task"),
    E::post(
        "remove_a_tag_from_a_task",
        "/tasks/{task_gid}/removeTag",
        PRETTY,
        "Remove a tag from a task",
    ),
    E::post(
        "add_followers_to_a_task",
        "/tasks/{task_gid}/addFollowers",
        ONE,
        "Add followers to a task",
    ),
    E::post(
        "remove_followers_from_a_task",
        "/tasks/{task_gid}/removeFollowers",
        ONE,
        "Remove followers from a task",
    ),
    E::get(
        "get_a_task_for_a_given_custom_id",
        "/workspaces/{workspace_gid}/tasks/custom_id/{custom_id}",
        ONE,
        "Get a task for a given custom ID",
    ),
    E::get(
        "search_tasks_in_a_workspace",
        "/workspaces/{workspace_gid}/tasks/search",
        SEARCH_TASKS,
        "Search tasks in a workspace",
    ),
    // Team memberships
    E::get(
        "get_a_team_membership",
        "/team_memberships/{team_membership_gid}",
        ONE,
        "Get a team membership",
    ),
    E::get(
        "get_team_memberships",
        "/team_memberships",
        &["team", "user", "workspace", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get team memberships",
    ),
    E::get(
        "get_memberships_from_a_team",
        "/teams/{team_gid}/team_memberships",
        PAGE,
        "Get memberships from a team",
    ),
    E::get(
        "get_memberships_from_a_user",
        "/users/{user_gid}/team_memberships",
        &["workspace", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get memberships from a user",
    ),
    // Teams
    E::post("create_a_team", "/teams", ONE, "Create a team"),
    E::get("get_a_team", "/teams/{team_gid}", ONE, "Get a team"),
    E::put("update_a_team", "/teams/{team_gid}", ONE, "Update a team"),
    E::get(
        "get_teams_in_a_workspace",
        "/workspaces/{workspace_gid}/teams",
        PAGE,
        "Get teams in a workspace",
    ),
    E::get(
        "get_teams_for_a_user",
        "/users/{user_gid}/teams",
        &["organization", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get teams for a user",
    ),
    E::post("add_a_user_to_a_team", "/teams/{team_gid}/addUser", ONE, "Add a user to a team"),
    E::post(
        "remove_a_user_from_a_team",
        "/teams/{team_gid}/removeUser",
        PRETTY,
        "Remove a user from a team",
    ),
    // Time periods
    E::get(
        "get_a_time_period",
        "/time_periods/{time_period_gid}",
        ONE,
        "Get a time period",
    ),
    E::get(
        "get_time_periods",
        "/time_periods",
        &["start_on", "end_on", "workspace", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get time periods",
    ),
    // Time tracking entries
    E::get(
        "get_time_tracking_entries_for_a_task",
        "/tasks/{task_gid}/time_tracking_entries",
        PAGE,
        "Get time tracking entries for a task",
    ),
    E::post(
        "create_a_time_tracking_entry",
        "/tasks/{task_gid}/time_tracking_entries",
        ONE,
        "Create a time tracking entry",
    ),
    E::get(
        "get_a_time_tracking_entry",
        "/time_tracking_entries/{time_tracking_entry_gid}",
        ONE,
        "Get a time tracking entry",
    ),
    E::put(
        "update_a_time_tracking_entry",
        "/time_tracking_entries/{time_tracking_entry_gid}",
        ONE,
        "Update a time tracking entry",
    ),
    E::delete(
        "delete_a_time_tracking_entry",
        "/time_tracking_entries/{time_tracking_entry_gid}",
        PRETTY,
        "Delete a time tracking entry",
    ),
    // Typeahead
    E::get(
        "get_objects_via_typeahead",
        "/workspaces/{workspace_gid}/typeahead",
        &["resource_type", "type", "query", "count", "opt_fields", "opt_pretty"],
        "Get objects via typeahead",
    ),
    // User task lists
    E::get(
        "get_a_user_task_list",
        "/user_task_lists/{user_task_list_gid}",
        ONE,
        "Get a user task list",
    ),
    E::get(
        "get_a_user_s_task_list",
        "/users/{user_gid}/user_task_list",
        &["workspace", "opt_fields", "opt_pretty"],
        "Get a user's task list",
    ),
    // Users
    E::get(
        "get_multiple_users",
        "/users",
        &["workspace", "team", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple users",
    ),
    E::get("get_a_user", "/users/{user_gid}", ONE, "Get a user"),
    E::get(
        "get_a_user_s_favorites",
        "/users/{user_gid}/favorites",
        &["resource_type", "workspace", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get a user's favorites",
    ),
    E::get("get_users_in_a_team", "/teams/{team_gid}/users", PAGE, "Get users in a team"),
    E::get(
        "get_users_in_a_workspace_or_organization",
        "/workspaces/{workspace_gid}/users",
        PAGE,
        "Get users in a workspace or organization",
    ),
    // Webhooks
    E::get(
        "get_multiple_webhooks",
        "/webhooks",
        &["workspace", "resource", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get multiple webhooks",
    ),
    E::post("establish_a_webhook", "/webhooks", ONE, "Establish a webhook"),
    E::get("get_a_webhook", "/webhooks/{webhook_gid}", ONE, "Get a webhook"),
    E::put("update_a_webhook", "/webhooks/{webhook_gid}", ONE, "Update a webhook"),
    E::delete("delete_a_webhook", "/webhooks/{webhook_gid}", PRETTY, "Delete a webhook"),
    // Workspace memberships
    E::get(
        "get_a_workspace_membership",
        "/workspace_memberships/{workspace_membership_gid}",
        ONE,
        "Get a workspace membership",
    ),
    E::get(
        "get_workspace_memberships_for_a_user",
        "/users/{user_gid}/workspace_memberships",
        PAGE,
        "Get workspace memberships for a user",
    ),
    E::get(
        "get_the_workspace_memberships_for_a_workspace",
        "/workspaces/{workspace_gid}/workspace_memberships",
        &["user", "limit", "offset", "opt_fields", "opt_pretty"],
        "Get the workspace memberships for a workspace",
    ),
    // Workspaces
    E::get("get_multiple_workspaces", "/workspaces", PAGE, "Get multiple workspaces"),
    E::get("get_a_workspace", "/workspaces/{workspace_gid}", ONE, "Get a workspace"),
    E::put("update_a_workspace", "/workspaces/{workspace_gid}", ONE, "Update a workspace"),
    E::post(
        "add_a_user_to_a_workspace_or_organization",
        "/workspaces/{workspace_gid}/addUser",
        ONE,
        "Add a user to a workspace or organization",
    ),
    E::post(
        "remove_a_user_from_a_workspace_or_organization",
        "/workspaces/{workspace_gid}/removeUser",
        PRETTY,
        "Remove a user from a workspace or organization",
    ),
];

/// Name-indexed view over a descriptor slice.
#[derive(Debug, Clone)]
pub struct EndpointTable {
    rows: &'static [E],
    by_name: HashMap<&'static str, usize>,
}

static ASANA: LazyLock<EndpointTable> = LazyLock::new(|| EndpointTable::new(ENDPOINTS));

impl EndpointTable {
    /// Index `rows` by name. A later duplicate shadows an earlier row.
    pub fn new(rows: &'static [E]) -> Self {
        let by_name = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.name, index))
            .collect();
        Self { rows, by_name }
    }

    /// The built-in Asana table, indexed on first use.
    pub fn asana() -> &'static EndpointTable {
        &ASANA
    }

    pub fn get(&self, name: &str) -> Option<&'static E> {
        self.by_name.get(name).map(|&index| &self.rows[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static E> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
