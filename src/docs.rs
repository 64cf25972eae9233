use utoipa::OpenApi;

use crate::modules::attendance::model::{AttendanceRecord, MarkAttendanceRequest};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, MessageResponse, SessionUser};
use crate::modules::internals::model::{InternalMark, UpsertInternalRequest};
use crate::modules::notes::model::{CreateNoteRequest, Note, UpdateNoteRequest};
use crate::modules::papers::model::{CreatePaperRequest, Paper};
use crate::modules::students::model::{CreateStudentRequest, Student};
use crate::modules::teachers::model::{
    ApproveTeacherRequest, CreateTeacherRequest, Teacher, TeacherName, UpdateTeacherStatusRequest,
};
use crate::modules::time_schedules::model::{TimeSchedule, UpsertTimeScheduleRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::teacher_login,
        crate::modules::auth::controller::student_login,
        crate::modules::auth::controller::logout,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::get_teacher_list,
        crate::modules::teachers::controller::get_unapproved_teachers,
        crate::modules::teachers::controller::get_teachers_by_status,
        crate::modules::teachers::controller::approve_teacher,
        crate::modules::teachers::controller::update_teacher_status,
        crate::modules::teachers::controller::approve_teachers_by_subject,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_student_list,
        crate::modules::students::controller::delete_student,
        crate::modules::papers::controller::create_paper,
        crate::modules::papers::controller::get_paper,
        crate::modules::papers::controller::get_papers_by_department,
        crate::modules::papers::controller::get_papers_by_teacher,
        crate::modules::papers::controller::delete_paper,
        crate::modules::notes::controller::create_note,
        crate::modules::notes::controller::get_note,
        crate::modules::notes::controller::get_notes_by_paper,
        crate::modules::notes::controller::update_note,
        crate::modules::notes::controller::delete_note,
        crate::modules::attendance::controller::mark_attendance,
        crate::modules::attendance::controller::get_attendance_by_student,
        crate::modules::attendance::controller::get_attendance_by_slot,
        crate::modules::internals::controller::upsert_internal,
        crate::modules::internals::controller::get_internals_by_paper,
        crate::modules::internals::controller::get_internals_by_student,
        crate::modules::time_schedules::controller::upsert_schedule,
        crate::modules::time_schedules::controller::get_schedule,
        crate::modules::time_schedules::controller::delete_schedule,
    ),
    components(schemas(
        SessionUser,
        LoginRequest,
        MessageResponse,
        ErrorResponse,
        Teacher,
        TeacherName,
        CreateTeacherRequest,
        ApproveTeacherRequest,
        UpdateTeacherStatusRequest,
        Student,
        CreateStudentRequest,
        Paper,
        CreatePaperRequest,
        Note,
        CreateNoteRequest,
        UpdateNoteRequest,
        AttendanceRecord,
        MarkAttendanceRequest,
        InternalMark,
        UpsertInternalRequest,
        TimeSchedule,
        UpsertTimeScheduleRequest,
    )),
    tags(
        (name = "Authentication", description = "Session login and logout"),
        (name = "Teachers", description = "Teacher registration, approval, and lookup"),
        (name = "Students", description = "Student registration and lookup"),
        (name = "Papers", description = "Course papers"),
        (name = "Notes", description = "Lecture notes per paper"),
        (name = "Attendance", description = "Per-hour attendance marks"),
        (name = "Internals", description = "Internal assessment marks"),
        (name = "Time Schedules", description = "Teacher timetables")
    ),
    info(
        title = "Campusdesk API",
        description = "Department/college record-keeping API with session-based authentication \
                       and HOD-gated teacher approval."
    )
)]
pub struct ApiDoc;
