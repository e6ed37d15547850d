//! Static content tables for the workflow guide
//!
//! Everything the UI displays lives here as compile-time constants. The
//! tables are process-wide constant state: initialized once, read-only
//! thereafter, keyed by the string identifiers the selection slots hold.

use super::catalog::{
    ComparisonRow, DiagramNode, HrConsideration, IssueType, Metrics, PracticeGroup, ScrumElement,
    ScrumTip, Stage, TreeChild,
};
use super::enums::IssueKind;
use crate::theme::{
    ACCENT_AMBER, ACCENT_BLUE, ACCENT_GREEN, ACCENT_INDIGO, ACCENT_ORANGE, ACCENT_PINK,
    ACCENT_SKY, ACCENT_SLATE, ACCENT_TEAL, ACCENT_VIOLET,
};

/// The eight stages of the development pipeline, in flow order
pub const STAGES: [Stage; 8] = [
    Stage {
        id: "backlog",
        name: "Backlog",
        description: "Ideas and requirements waiting to be refined",
        accent: ACCENT_SLATE,
        activities: &["Product grooming", "Priority assignment", "Initial estimation"],
        metrics: Some(Metrics {
            avg_time: "∞",
            success_rate: "N/A",
        }),
    },
    Stage {
        id: "ready",
        name: "Ready for Dev",
        description: "Fully refined and ready to be picked up",
        accent: ACCENT_BLUE,
        activities: &[
            "Acceptance criteria defined",
            "Technical design reviewed",
            "Dependencies identified",
        ],
        metrics: Some(Metrics {
            avg_time: "2-3 days",
            success_rate: "95%",
        }),
    },
    Stage {
        id: "inprogress",
        name: "In Progress",
        description: "Active development work",
        accent: ACCENT_AMBER,
        activities: &["Coding", "Unit testing", "Code review preparation"],
        metrics: Some(Metrics {
            avg_time: "3-5 days",
            success_rate: "88%",
        }),
    },
    Stage {
        id: "codereview",
        name: "Code Review",
        description: "Peer review of implementation",
        accent: ACCENT_VIOLET,
        activities: &["PR review", "Security check", "Code quality verification"],
        metrics: Some(Metrics {
            avg_time: "1-2 days",
            success_rate: "92%",
        }),
    },
    Stage {
        id: "qa",
        name: "QA Testing",
        description: "Quality assurance verification",
        accent: ACCENT_ORANGE,
        activities: &[
            "Functional testing",
            "Integration testing",
            "Regression testing",
        ],
        metrics: Some(Metrics {
            avg_time: "2-3 days",
            success_rate: "85%",
        }),
    },
    Stage {
        id: "staging",
        name: "Staging",
        description: "Pre-production validation",
        accent: ACCENT_INDIGO,
        activities: &["UAT", "Performance testing", "Security scan"],
        metrics: Some(Metrics {
            avg_time: "1-2 days",
            success_rate: "97%",
        }),
    },
    Stage {
        id: "ready-prod",
        name: "Ready for Prod",
        description: "Approved and scheduled for release",
        accent: ACCENT_TEAL,
        activities: &[
            "Release notes prepared",
            "Deployment plan ready",
            "Stakeholder approval",
        ],
        metrics: Some(Metrics {
            avg_time: "< 1 day",
            success_rate: "99%",
        }),
    },
    Stage {
        id: "done",
        name: "Done",
        description: "Deployed to production and verified",
        accent: ACCENT_GREEN,
        activities: &[
            "Live in production",
            "Monitoring active",
            "Documentation updated",
        ],
        metrics: Some(Metrics {
            avg_time: "Complete",
            success_rate: "100%",
        }),
    },
];

/// The issue-type taxonomy, keyed by display name
pub const ISSUE_TYPES: [IssueType; 6] = [
    IssueType {
        name: "Idea",
        kind: IssueKind::Idea,
        description: "Initial concepts and suggestions from team or customers",
        when_to_use: "Use for brainstorming and innovation before formal planning",
        workflow: "Idea → Discussion → Approved → Convert to Epic/Story",
        estimated_size: "Not estimated yet",
        assignee: "Product Manager or team member who suggested it",
        priority: "Not prioritized until reviewed",
        examples: &[
            "Add AI-powered resume screening",
            "Integration with LinkedIn for recruiting",
            "Mobile app for employee check-ins",
            "Automated onboarding workflows",
        ],
        best_practices: &[
            "Keep description brief but clear",
            "Include business value or problem being solved",
            "Attach mockups or references if available",
            "Tag with relevant stakeholders for review",
            "Review ideas monthly in innovation meetings",
        ],
    },
    IssueType {
        name: "Epic",
        kind: IssueKind::Epic,
        description: "Large feature sets that span multiple sprints",
        when_to_use: "For major features that take 2+ sprints and contain multiple stories",
        workflow: "Break down into Stories → Track progress → Close when all stories complete",
        estimated_size: "20-100+ story points",
        assignee: "Product Owner or Tech Lead",
        priority: "High/Medium based on roadmap",
        examples: &[
            "Employee Onboarding Module",
            "Performance Review System",
            "Time & Attendance Tracking",
            "Payroll Integration Platform",
        ],
        best_practices: &[
            "Define clear business objectives and KPIs",
            "Create a feature brief with user flows",
            "Break down into 5-15 user stories",
            "Set target release date or quarter",
            "Review progress in sprint reviews",
            "Include technical spikes if architecture needs research",
        ],
    },
    IssueType {
        name: "Story",
        kind: IssueKind::Story,
        description: "User-facing features from end-user perspective",
        when_to_use: "For any feature that delivers value to users",
        workflow: "Backlog → Ready for Dev → In Progress → Code Review → QA → Staging → Done",
        estimated_size: "1-13 story points",
        assignee: "Developer",
        priority: "Must Have / Should Have / Could Have",
        examples: &[
            "As an HR Admin, I want to bulk upload employee data via CSV",
            "As an Employee, I want to request time off through mobile app",
            "As a Manager, I want to approve leave requests with one click",
            "As a Recruiter, I want to filter candidates by skills",
        ],
        best_practices: &[
            "Use format: As a [role], I want [feature], so that [benefit]",
            "Include clear acceptance criteria (3-7 points)",
            "Add mockups or wireframes when UI is involved",
            "Define edge cases and error handling",
            "Estimate in story points during refinement",
            "Keep stories completable within one sprint",
            "Tag with affected user roles (HR Admin, Employee, Manager)",
        ],
    },
    IssueType {
        name: "Task",
        kind: IssueKind::Task,
        description: "Technical work without direct user value",
        when_to_use: "For infrastructure, refactoring, or internal improvements",
        workflow: "Backlog → In Progress → Code Review → QA (if needed) → Done",
        estimated_size: "1-8 story points",
        assignee: "Developer or DevOps Engineer",
        priority: "Based on technical debt or performance impact",
        examples: &[
            "Setup Redis caching for employee search",
            "Migrate database to PostgreSQL 15",
            "Configure CI/CD pipeline for staging",
            "Implement rate limiting on API endpoints",
            "Update dependencies to latest versions",
        ],
        best_practices: &[
            "Explain why this work is needed",
            "Include technical acceptance criteria",
            "Document any configuration changes",
            "Add links to relevant documentation or ADRs",
            "Specify if it blocks other work",
            "Consider impact on existing features",
        ],
    },
    IssueType {
        name: "Bug",
        kind: IssueKind::Bug,
        description: "Issues in production or staging that need fixing",
        when_to_use: "When something is broken or not working as designed",
        workflow: "Reported → Triaged → In Progress → Code Review → QA → Hotfix/Next Release",
        estimated_size: "1-5 story points (fix time)",
        assignee: "Developer (often who wrote the feature)",
        priority: "Critical / High / Medium / Low",
        examples: &[
            "Employee profile page returns 500 error",
            "Leave balance calculation is incorrect",
            "Email notifications not being sent",
            "Dashboard loads slowly with 1000+ employees",
            "Mobile app crashes when uploading documents",
        ],
        best_practices: &[
            "Include steps to reproduce",
            "Add screenshots or error logs",
            "Specify environment (production/staging)",
            "Tag severity: Critical, High, Medium, Low",
            "Link to related story if applicable",
            "Set SLA based on priority",
            "Add regression test after fixing",
        ],
    },
    IssueType {
        name: "Sub-task",
        kind: IssueKind::Subtask,
        description: "Breakdown of Stories or Tasks into smaller pieces",
        when_to_use: "To divide complex work into manageable chunks",
        workflow: "Same as parent issue",
        estimated_size: "0.5-3 story points each",
        assignee: "Different team members can take different sub-tasks",
        priority: "Inherits from parent",
        examples: &[
            "Parent: Employee Profile Page",
            "• Design database schema",
            "• Create API endpoints",
            "• Build frontend UI",
            "• Write unit tests",
        ],
        best_practices: &[
            "Create 3-6 sub-tasks per story",
            "Each sub-task should be completable in 2-4 hours",
            "Assign to specific team members",
            "Use for parallel work distribution",
            "Parent story closes only when all sub-tasks done",
            "Good for new developers to pick smaller chunks",
        ],
    },
];

/// Sprint and team practice groups
pub const PRACTICE_GROUPS: [PracticeGroup; 4] = [
    PracticeGroup {
        title: "Sprint Structure",
        accent: ACCENT_BLUE,
        points: &[
            "2-week sprints for faster feedback",
            "Sprint planning every Monday morning",
            "Daily standups at 9:30 AM (15 min max)",
            "Sprint review and retrospective on Friday",
        ],
    },
    PracticeGroup {
        title: "Story Points",
        accent: ACCENT_VIOLET,
        points: &[
            "Use Fibonacci sequence (1, 2, 3, 5, 8, 13)",
            "1-2 points: Few hours of work",
            "3-5 points: 1-2 days of work",
            "8+ points: Consider breaking down",
        ],
    },
    PracticeGroup {
        title: "Definition of Done",
        accent: ACCENT_GREEN,
        points: &[
            "Code reviewed and approved",
            "Unit tests written (80% coverage)",
            "QA tested and approved",
            "Documentation updated",
            "No critical/high bugs remaining",
        ],
    },
    PracticeGroup {
        title: "SLA Guidelines",
        accent: ACCENT_ORANGE,
        points: &[
            "Critical bugs: 4 hours response",
            "High priority: 24 hours response",
            "Medium priority: 3 days response",
            "Low priority: Next sprint",
        ],
    },
];

/// Core components of the Scrum framework
pub const SCRUM_ELEMENTS: [ScrumElement; 6] = [
    ScrumElement {
        title: "Sprint",
        accent: ACCENT_INDIGO,
        description: "A time-boxed iteration (usually 2 weeks) where a potentially releasable product increment is created.",
        key_points: &["Fixed duration", "Cannot be extended", "Has a clear Sprint Goal"],
    },
    ScrumElement {
        title: "Daily Standup",
        accent: ACCENT_GREEN,
        description: "15-minute daily meeting where team members synchronize activities and create a plan for the next 24 hours.",
        key_points: &[
            "What did I do yesterday?",
            "What will I do today?",
            "Any blockers?",
        ],
    },
    ScrumElement {
        title: "Sprint Planning",
        accent: ACCENT_AMBER,
        description: "Collaborative meeting to define the Sprint Goal and select Product Backlog items for the Sprint.",
        key_points: &["Define Sprint Goal", "Select backlog items", "Plan the work"],
    },
    ScrumElement {
        title: "Sprint Review",
        accent: ACCENT_VIOLET,
        description: "Meeting at sprint end to inspect the increment and adapt the Product Backlog if needed.",
        key_points: &["Demo working software", "Gather feedback", "Update backlog"],
    },
    ScrumElement {
        title: "Sprint Retrospective",
        accent: ACCENT_PINK,
        description: "Meeting for the Scrum Team to inspect itself and create an improvement plan.",
        key_points: &[
            "What went well?",
            "What needs improvement?",
            "Action items",
        ],
    },
    ScrumElement {
        title: "Product Backlog",
        accent: ACCENT_SKY,
        description: "Ordered list of everything that is known to be needed in the product.",
        key_points: &["Prioritized by PO", "Living document", "Single source of truth"],
    },
];

/// Pro tips for running Scrum well
pub const SCRUM_TIPS: [ScrumTip; 6] = [
    ScrumTip {
        title: "Keep Sprints Short",
        description: "2-week sprints provide faster feedback loops and reduce risk of going off-track.",
    },
    ScrumTip {
        title: "Protect the Sprint",
        description: "Once a sprint starts, avoid adding new work. Scope changes should wait for next sprint.",
    },
    ScrumTip {
        title: "Embrace Transparency",
        description: "Make work visible using JIRA boards. Everyone should see progress and blockers.",
    },
    ScrumTip {
        title: "Focus on Outcomes",
        description: "Measure success by delivered value, not just completed tasks or velocity.",
    },
    ScrumTip {
        title: "Continuous Improvement",
        description: "Use retrospectives to identify one actionable improvement each sprint.",
    },
    ScrumTip {
        title: "Collaborate Daily",
        description: "Keep standups focused. Use them for coordination, not status reports to managers.",
    },
];

/// Nodes of the interactive hierarchy diagram
///
/// "Subtask" is one logical record even though the diagram renders it under
/// all three second-level branches; selection is keyed by id so every
/// occurrence highlights together.
pub const DIAGRAM_NODES: [DiagramNode; 5] = [
    DiagramNode {
        id: "epic",
        kind: IssueKind::Epic,
        name: "Epic",
        summary: "represents a large body of work",
        description: "Epics can be broken down into smaller chunks called Stories, Tasks, and Bugs. You and your team can decide what constitutes a large body of work.",
        example: "You might create an epic for a redesign of the Employee Dashboard, or implementing the entire Time & Attendance module.",
        tip: "Known as \"parent\" work items, epics contain smaller work items within them.",
    },
    DiagramNode {
        id: "story",
        kind: IssueKind::Story,
        name: "Story",
        summary: "represents user-facing functionality",
        description: "Stories capture requirements from the end-user perspective. They deliver value directly to users and are sized to complete in one sprint.",
        example: "\"As an HR Admin, I want to bulk upload employee data via CSV so that I can onboard multiple employees at once.\"",
        tip: "Use the format: As a [role], I want [feature], so that [benefit].",
    },
    DiagramNode {
        id: "task",
        kind: IssueKind::Task,
        name: "Task",
        summary: "represents technical work",
        description: "Tasks are technical work that doesn't directly provide user value but is necessary for the system. Often infrastructure, refactoring, or internal improvements.",
        example: "Setup Redis caching for employee search, Configure CI/CD pipeline, or Migrate database to PostgreSQL 15.",
        tip: "Tasks help track work that needs to be done but isn't visible to end users.",
    },
    DiagramNode {
        id: "bug",
        kind: IssueKind::Bug,
        name: "Bug",
        summary: "represents something broken",
        description: "Bugs are defects or issues that cause the system to behave incorrectly. They need to be triaged, prioritized, and fixed based on severity.",
        example: "Employee profile page returns 500 error, Leave balance calculation is incorrect, or Email notifications not being sent.",
        tip: "Always include steps to reproduce, expected vs actual behavior, and screenshots.",
    },
    DiagramNode {
        id: "subtask",
        kind: IssueKind::Subtask,
        name: "Subtask",
        summary: "represents a breakdown of larger items",
        description: "Subtasks divide Stories or Tasks into smaller, manageable pieces. They help distribute work among team members and track progress granularly.",
        example: "A Story \"Employee Profile Page\" might have subtasks: Design database schema, Create API endpoints, Build frontend UI, Write unit tests.",
        tip: "Each subtask should be completable in 2-4 hours. Create 3-6 subtasks per story.",
    },
];

/// Root of the Real-World Example tree
pub const EXAMPLE_TREE_ROOT: &str = "Epic: Develop Employee Management Module";

/// Children of the Real-World Example tree, in display order
pub const EXAMPLE_TREE_CHILDREN: [TreeChild; 7] = [
    TreeChild {
        kind: IssueKind::Story,
        title: "Story: As an admin, I can view employee list",
        indent: false,
    },
    TreeChild {
        kind: IssueKind::Story,
        title: "Story: As an admin, I can add new employees",
        indent: false,
    },
    TreeChild {
        kind: IssueKind::Task,
        title: "Task: Design database schema for employees",
        indent: false,
    },
    TreeChild {
        kind: IssueKind::Task,
        title: "Task: Create REST API endpoints",
        indent: false,
    },
    TreeChild {
        kind: IssueKind::Task,
        title: "Task: Build employee list UI component",
        indent: false,
    },
    TreeChild {
        kind: IssueKind::Bug,
        title: "Bug: Fix pagination on employee list",
        indent: false,
    },
    TreeChild {
        kind: IssueKind::Subtask,
        title: "Subtask: Deploy to staging environment",
        indent: true,
    },
];

/// Rows of the Quick Comparison table
pub const COMPARISON_ROWS: [ComparisonRow; 6] = [
    ComparisonRow {
        kind: IssueKind::Idea,
        name: "Idea",
        size: "Just a suggestion",
        time: "Never (until approved)",
        creator: "Anyone",
    },
    ComparisonRow {
        kind: IssueKind::Epic,
        name: "Epic",
        size: "HUGE (50-100+ points)",
        time: "2-3 months",
        creator: "Product Manager",
    },
    ComparisonRow {
        kind: IssueKind::Story,
        name: "Story",
        size: "Medium (3-8 points)",
        time: "2-5 days",
        creator: "Product Manager",
    },
    ComparisonRow {
        kind: IssueKind::Task,
        name: "Task",
        size: "Small-Medium (1-8 points)",
        time: "1-3 days",
        creator: "Developers",
    },
    ComparisonRow {
        kind: IssueKind::Bug,
        name: "Bug",
        size: "Varies (1-5 points)",
        time: "4 hours - 2 days",
        creator: "Anyone",
    },
    ComparisonRow {
        kind: IssueKind::Subtask,
        name: "Sub-task",
        size: "Tiny (0.5-2 points)",
        time: "2-4 hours",
        creator: "Developers",
    },
];

/// HR platform specific consideration checklists
pub const HR_CONSIDERATIONS: [HrConsideration; 3] = [
    HrConsideration {
        title: "Security & Compliance",
        points: &[
            "GDPR compliance checks",
            "PII data protection review",
            "Access control verification",
            "Audit logging validation",
        ],
    },
    HrConsideration {
        title: "Integration Testing",
        points: &[
            "Payroll system integration",
            "SSO/authentication flows",
            "Email notification systems",
            "Calendar integrations",
        ],
    },
    HrConsideration {
        title: "Performance",
        points: &[
            "Report generation speed",
            "Dashboard load times",
            "Bulk operations handling",
            "Mobile responsiveness",
        ],
    },
];

/// Phase legend shown under the workflow grid: phase name plus the stage
/// span it covers
pub const FLOW_PHASES: [(&str, &str); 4] = [
    ("Planning Phase", "Backlog → Ready for Dev"),
    ("Development Phase", "In Progress → Code Review"),
    ("Testing Phase", "QA Testing → Staging"),
    ("Deployment Phase", "Ready for Prod → Done"),
];

/// Sprint length shown in the header stats bar
pub const SPRINT_LENGTH: &str = "2 wk";
