mod lesson_vm;
mod timeline_vm;
mod transition;

pub use lesson_vm::{
    CompletionPhase, LessonContent, RETURN_TO_TIMELINE_DELAY_MS, completion_error_message,
    lesson_content, markdown_to_html, sanitize_html,
};
pub use timeline_vm::{
    BlockTabVm, TimelineRowVm, TimelineVm, block_label, completed_flags, initial_block,
    map_timeline,
};
pub use transition::{BlockSwitch, FADE_IN_MS, FADE_OUT_MS, SwitchPhase};
