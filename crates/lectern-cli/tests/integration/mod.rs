mod course_on_disk;
