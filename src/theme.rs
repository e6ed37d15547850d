//! Theme module for workflow-tui
//!
//! This module provides a centralized color palette and styling constants.
//! The accent colors mirror the HR platform's brand palette, one per
//! catalog identity (workflow stage, issue type, practice group).

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors - Deep Space Palette
// ============================================================================

/// Primary background color - deepest space black (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - slightly lighter (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Chrome Colors
// ============================================================================

/// Primary highlight for the active tab and selected borders (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Accent Colors - one per catalog identity
// ============================================================================

/// Backlog stage / Sub-task accent (#64748b)
pub const ACCENT_SLATE: Color = Color::Rgb(100, 116, 139);

/// Ready for Dev stage / Task accent (#3b82f6)
pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);

/// In Progress stage accent (#f59e0b)
pub const ACCENT_AMBER: Color = Color::Rgb(245, 158, 11);

/// Code Review stage accent (#8b5cf6)
pub const ACCENT_VIOLET: Color = Color::Rgb(139, 92, 246);

/// QA Testing stage accent (#f97316)
pub const ACCENT_ORANGE: Color = Color::Rgb(249, 115, 22);

/// Staging stage / Sprint element accent (#6366f1)
pub const ACCENT_INDIGO: Color = Color::Rgb(99, 102, 241);

/// Ready for Prod stage accent (#14b8a6)
pub const ACCENT_TEAL: Color = Color::Rgb(20, 184, 166);

/// Done stage / Story accent (#22c55e)
pub const ACCENT_GREEN: Color = Color::Rgb(34, 197, 94);

/// Idea accent (#eab308)
pub const ACCENT_YELLOW: Color = Color::Rgb(234, 179, 8);

/// Epic accent (#a855f7)
pub const ACCENT_PURPLE: Color = Color::Rgb(168, 85, 247);

/// Bug accent (#ef4444)
pub const ACCENT_RED: Color = Color::Rgb(239, 68, 68);

/// Retrospective element accent (#ec4899)
pub const ACCENT_PINK: Color = Color::Rgb(236, 72, 153);

/// Product Backlog element accent (#0ea5e9)
pub const ACCENT_SKY: Color = Color::Rgb(14, 165, 233);

// ============================================================================
// Borders
// ============================================================================

/// Rounded border set used by all card blocks
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;
