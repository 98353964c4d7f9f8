use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// `{success, code, message, data}`; `code` is 20000 on success.
#[derive(ToSchema)]
pub struct EnvelopeDoc {
    pub success: bool,
    pub code: i32,
    pub message: String,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(ToSchema)]
pub struct TeacherInputDoc {
    pub id: Option<Uuid>,
    pub name: String,
    pub intro: Option<String>,
    pub career: Option<String>,
    /// 1 = senior, 2 = chief
    pub level: Option<i32>,
    pub avatar: Option<String>,
    pub sort: Option<i32>,
}

#[derive(ToSchema)]
pub struct CourseInfoDoc {
    pub id: Option<Uuid>,
    pub teacher_id: Uuid,
    pub subject_id: Uuid,
    pub subject_parent_id: Uuid,
    pub title: String,
    /// Minor currency units.
    pub price: i64,
    pub lesson_num: i32,
    pub cover: Option<String>,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct CourseFrontQueryDoc {
    pub subject_parent_id: Option<String>,
    pub subject_id: Option<String>,
    pub buy_count_sort: Option<String>,
    pub gmt_create_sort: Option<String>,
    pub price_sort: Option<String>,
}

#[derive(ToSchema)]
pub struct ChapterInputDoc {
    pub id: Option<Uuid>,
    pub course_id: Uuid,
    pub title: String,
    pub sort: Option<i32>,
}

#[derive(ToSchema)]
pub struct VideoInputDoc {
    pub id: Option<Uuid>,
    pub course_id: Uuid,
    pub chapter_id: Uuid,
    pub title: String,
    pub video_source_id: Option<String>,
    pub video_original_name: Option<String>,
    pub sort: Option<i32>,
    pub is_free: Option<bool>,
    pub duration: Option<f64>,
    pub size: Option<i64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::teacher::find_all,
        crate::routes::teacher::get_teacher,
        crate::routes::teacher::add_teacher,
        crate::routes::teacher::update_teacher,
        crate::routes::teacher::remove_teacher,
        crate::routes::course::add_course_info,
        crate::routes::course::get_course_info,
        crate::routes::course::update_course_info,
        crate::routes::course::get_publish_course_info,
        crate::routes::course::publish_course,
        crate::routes::course::remove_course,
        crate::routes::course_front::get_front_course_list,
        crate::routes::chapter::get_chapter_video,
        crate::routes::chapter::add_chapter,
        crate::routes::chapter::get_chapter_info,
        crate::routes::chapter::update_chapter,
        crate::routes::chapter::remove_chapter,
        crate::routes::video::add_video,
        crate::routes::video::get_video,
        crate::routes::video::update_video,
        crate::routes::video::remove_video,
        crate::routes::subject::get_all_subject,
    ),
    components(
        schemas(
            HealthResponse,
            EnvelopeDoc,
            TeacherInputDoc,
            CourseInfoDoc,
            CourseFrontQueryDoc,
            ChapterInputDoc,
            VideoInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "teacher"),
        (name = "course"),
        (name = "course_front"),
        (name = "chapter"),
        (name = "video"),
        (name = "subject")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/eduservice/coursefront/getFrontCourseList/{page}/{limit}"));
        assert!(paths.contains_key("/eduservice/course/{course_id}"));
        assert_eq!(paths.len(), 23);
    }
}
